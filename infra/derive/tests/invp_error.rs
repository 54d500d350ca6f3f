#[test]
fn invp_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/invp_error_pass.rs");
    t.pass("tests/ui/invp_error_context.rs");
}
