//! 기동 콘솔 출력 헬퍼.
//!
//! 레지스트리 초기화가 진행되는 모습을 박스 제목 / 단계 / 트리 항목
//! 세 가지 모양으로 찍습니다. 로거 설정과 무관하게 항상 보여야 하는
//! 출력이라 `println!`을 직접 씁니다. 호출하는 쪽은
//! [`crate::core::registry`] 하나뿐입니다.
//!
//! ```text
//! ╔══════════════════════════════════════════════════╗
//! ║            🔄 WIRING COMPONENT REGISTRY          ║
//! ╚══════════════════════════════════════════════════╝
//! → Step 1: Instantiating repositories
//!    ├─ driver_repository: ✓ Ready
//! ✓ Step 1: Repositories ready (2 items)
//! ```

/// 이중선 박스로 감싼 제목 한 줄.
///
/// 제목이 50칸을 넘으면 박스가 따라 늘어나고, 넘지 않으면 50칸을
/// 유지합니다. `chars().count()`로 세므로 한글 제목도 깨지지 않습니다.
pub fn print_boxed_title(title: &str) {
    let content_width = (title.chars().count() + 6).max(50);
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^width$}║", title, width = content_width - 1);
    println!("╚{}╝", border);
}

/// `→ Step N: ...` 형식의 단계 시작 줄.
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// `✓ Step N: ... (N items)` 형식의 단계 완료 줄.
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 단계 아래에 들여쓴 `├─ 이름: 상태` 한 줄.
///
/// 레지스트리가 컴포넌트 하나를 만들 때마다 등록명과 함께 부릅니다.
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 초기화가 끝난 뒤의 집계 박스.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║          🎉 SERVICE REGISTRY INITIALIZED         ║
/// ╚══════════════════════════════════════════════════╝
///    📦 Repositories: 2
///    🔧 Services: 2
///    🚀 Total Components: 4
/// ```
pub fn print_final_summary(repos: usize, services: usize) {
    println!();
    print_boxed_title("🎉 SERVICE REGISTRY INITIALIZED");
    println!("   📦 Repositories: {}", repos);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Total Components: {}", repos + services);
    println!();
}

/// 이름 조회 캐시 구성 결과 한 줄 (`cache_type`은 "Service"나 "Repository").
pub fn print_cache_initialized(cache_type: &str, count: usize) {
    println!("   ├─ {} Cache: {} entries loaded", cache_type, count);
}
