use crate::planner::FIX_NAME;
use crate::registry::CodeFixRegistry;

#[test]
fn test_await_diagnostics_map_to_make_async() {
    for code in CodeFixRegistry::supported_diagnostic_codes() {
        let fixes = CodeFixRegistry::fixes_for_diagnostic_code(code);
        assert_eq!(fixes.len(), 1, "{code}");
        let (fix_name, fix_id, description, fix_all) = fixes[0];
        assert_eq!(fix_name, FIX_NAME);
        assert_eq!(fix_id, FIX_NAME);
        assert_eq!(description, "Make method async");
        assert_eq!(fix_all, "Make all methods async");
    }
}

#[test]
fn test_unknown_code_has_no_fixes() {
    assert!(CodeFixRegistry::fixes_for_diagnostic_code("CS0001").is_empty());
    assert!(CodeFixRegistry::fixes_for_diagnostic_code("").is_empty());
}
