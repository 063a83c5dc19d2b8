//! Engine Property Tests
//!
//! End-to-end checks through the public app surface: resolution, the
//! auto-trigger, and the manual replace-all command.

use autoreplace::core::commands::MANUAL_REPLACE_ALL;
use autoreplace::core::commands::replace::{NO_RULES_NOTICE, NONE_FOUND_NOTICE};
use autoreplace::core::dispatcher::DispatchResult;
use autoreplace::{AutoReplaceApp, Buffer, Mode, Position, Rule, RuleSet, TextDocument};

fn app_with(rules: Vec<Rule>) -> AutoReplaceApp {
    let mut app = AutoReplaceApp::new();
    app.settings.replacements = rules;
    app
}

/// Type `text` one character at a time, notifying the app after each one
fn type_into(app: &mut AutoReplaceApp, doc: &mut Buffer, text: &str) {
    for c in text.chars() {
        doc.type_text(&c.to_string());
        app.handle_change(Some(&mut *doc));
    }
}

// =============================================================================
// RESOLVER
// =============================================================================

#[test]
fn scoped_rule_wins_over_global() {
    let rules = vec![
        Rule::new("АГ", "Артериальная гипертензия"),
        Rule::new("АГ", "Аллергический гастрит").in_folder("Гастро/"),
    ];
    let set = RuleSet::new(&rules);
    let rule = set.resolve("аг", "Гастро/пациент.md", Mode::Auto);
    assert_eq!(
        rule.map(|r| r.expansion.as_str()),
        Some("Аллергический гастрит")
    );
}

#[test]
fn manual_only_rule_never_resolves_in_auto_mode() {
    let rules = vec![
        Rule::new("АГ", "Артериальная гипертензия").manual(),
        Rule::new("АГ", "scoped").in_folder("a/").manual(),
    ];
    let set = RuleSet::new(&rules);
    assert!(set.resolve("АГ", "a/b.md", Mode::Auto).is_none());
    assert!(set.resolve("АГ", "", Mode::Auto).is_none());
}

// =============================================================================
// AUTO-TRIGGER
// =============================================================================

#[test]
fn typing_expands_after_boundary() {
    let mut app = app_with(vec![Rule::new("АД", "Артериальное давление")]);
    let mut doc = Buffer::new().with_path("notes/visit.md");
    type_into(&mut app, &mut doc, "АД 120/80.");
    assert_eq!(doc.to_string(), "Артериальное давление 120/80.");
    assert_eq!(doc.cursor(), Position::new(0, 29));
}

#[test]
fn typing_continues_after_expansion() {
    let mut app = app_with(vec![Rule::new("btw", "by the way")]);
    let mut doc = Buffer::new();
    type_into(&mut app, &mut doc, "btw, hi");
    assert_eq!(doc.to_string(), "by the way, hi");
}

#[test]
fn equal_expansion_produces_no_edit() {
    let mut app = app_with(vec![Rule::new("да", "да")]);
    let mut doc = Buffer::from_string("да ").with_cursor(0, 3);
    app.handle_change(Some(&mut doc));
    assert_eq!(doc.version, 0);
}

#[test]
fn disabled_auto_replace_reads_nothing() {
    let mut app = app_with(vec![Rule::new("btw", "by the way")]);
    app.settings.auto_replace = false;
    let mut doc = Buffer::new();
    type_into(&mut app, &mut doc, "btw ");
    assert_eq!(doc.to_string(), "btw ");
}

// =============================================================================
// MANUAL REPLACE-ALL
// =============================================================================

#[test]
fn longer_abbreviation_is_not_fragmented() {
    let mut app = app_with(vec![
        Rule::new("АГ", "Артериальная гипертензия").manual(),
        Rule::new("АГС", "Синдром АГ").manual(),
    ]);
    let mut doc = Buffer::from_string("АГС нормальна");
    let result = app.execute(MANUAL_REPLACE_ALL, Some(&mut doc));
    // "Синдром АГ" is then visible to the shorter rule on the same line
    assert_eq!(doc.line(0).as_deref(), Some("Синдром Артериальная гипертензия нормальна"));
    assert_eq!(
        result,
        DispatchResult::Info("Manual abbreviations replaced: 2".to_string())
    );
}

#[test]
fn shorter_rule_alone_leaves_longer_token() {
    let mut app = app_with(vec![Rule::new("АГ", "Артериальная гипертензия").manual()]);
    let mut doc = Buffer::from_string("АГС нормальна");
    let result = app.execute(MANUAL_REPLACE_ALL, Some(&mut doc));
    assert_eq!(doc.to_string(), "АГС нормальна");
    assert_eq!(result, DispatchResult::Info(NONE_FOUND_NOTICE.to_string()));
}

#[test]
fn second_pass_replaces_nothing() {
    let mut app = app_with(vec![
        Rule::new("ЧСС", "частота сердечных сокращений").manual(),
        Rule::new("АД", "артериальное давление").manual(),
    ]);
    let mut doc = Buffer::from_string("АД и ЧСС в норме.\n(ЧСС) 72, АД 120/80");
    let first = app.execute(MANUAL_REPLACE_ALL, Some(&mut doc));
    assert_eq!(
        first,
        DispatchResult::Info("Manual abbreviations replaced: 4".to_string())
    );
    let after_first = doc.to_string();

    let second = app.execute(MANUAL_REPLACE_ALL, Some(&mut doc));
    assert_eq!(second, DispatchResult::Info(NONE_FOUND_NOTICE.to_string()));
    assert_eq!(doc.to_string(), after_first);
}

#[test]
fn caret_stays_on_same_logical_position() {
    let mut app = app_with(vec![Rule::new("АГ", "Артериальная гипертензия").manual()]);
    // Caret at the end of the line, after the period
    let mut doc = Buffer::from_string("пациент с АГ.").with_cursor(0, 13);
    app.execute(MANUAL_REPLACE_ALL, Some(&mut doc));
    assert_eq!(doc.cursor(), Position::new(0, 13 + 22));

    let line = doc.line(0).unwrap_or_default();
    assert_eq!(line.chars().count(), 35);
}

#[test]
fn caret_between_two_matches() {
    let mut app = app_with(vec![Rule::new("x", "xyz").manual()]);
    let mut doc = Buffer::from_string("x | x").with_cursor(0, 2);
    app.execute(MANUAL_REPLACE_ALL, Some(&mut doc));
    assert_eq!(doc.to_string(), "xyz | xyz");
    assert_eq!(doc.cursor(), Position::new(0, 4));
}

#[test]
fn rules_outside_folder_are_not_applicable() {
    let mut app = app_with(vec![
        Rule::new("АГ", "Артериальная гипертензия")
            .in_folder("Кардио/")
            .manual(),
        Rule::new("АД", "Артериальное давление"),
    ]);
    let mut doc = Buffer::from_string("АГ АД").with_path("Неврология/x.md");
    let result = app.execute(MANUAL_REPLACE_ALL, Some(&mut doc));
    assert_eq!(result, DispatchResult::Info(NO_RULES_NOTICE.to_string()));
    assert_eq!(doc.version, 0);
}

#[test]
fn no_active_document_reports_notice() {
    let mut app = app_with(vec![Rule::new("x", "y").manual()]);
    let result = app.execute(MANUAL_REPLACE_ALL, None);
    assert_eq!(result, DispatchResult::Info(NO_RULES_NOTICE.to_string()));
    assert_eq!(app.message.as_deref(), Some(NO_RULES_NOTICE));
}
