//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 과정에서 사용되는 터미널 출력 함수들을 제공합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  System Started                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Connecting user store
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
pub fn print_step_complete(step: u8, description: &str) {
    println!("✓ Step {}: {}", step, description);
}

/// 하위 작업의 상태를 트리 형태로 표시합니다
///
/// ```text
///    ├─ UserStore: memory
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 최종 구성 요약을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║             🎉 POKEDEX BACKEND READY             ║
/// ╚══════════════════════════════════════════════════╝
///    ├─ Storage: mongodb
///    ├─ Mailer: log
///    🚀 Total Components: 5
/// ```
pub fn print_final_summary(settings: &[(&str, String)], components: &[&str]) {
    println!();
    print_boxed_title("🎉 POKEDEX BACKEND READY");
    for (name, value) in settings {
        print_sub_task(name, value);
    }
    for component in components {
        print_sub_task(component, "ready");
    }
    println!("   🚀 Total Components: {}", components.len());
    println!();
}
