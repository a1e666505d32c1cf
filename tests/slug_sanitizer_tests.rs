use std::collections::HashSet;
use std::convert::Infallible;

use mealshare_backend::entities::meal::MealDraft;
use mealshare_backend::utils::sanitize::sanitize_rich_text;
use mealshare_backend::utils::slugs::{base_slug, unique_slug};
use validator::Validate;

// ───── Slug generation ──────────────────────────────────────────────

#[test]
fn base_slug_normalizes_title() {
    assert_eq!(base_slug("Big Burger!"), "big-burger");
    assert_eq!(base_slug("  Schnitzel  &  Fries  "), "schnitzel-fries");
    assert_eq!(base_slug("Crème Brûlée"), "creme-brulee");
}

#[test]
fn base_slug_falls_back_for_empty_titles() {
    assert_eq!(base_slug(""), "meal");
    assert_eq!(base_slug("   "), "meal");
    assert_eq!(base_slug("!!!"), "meal");
}

#[tokio::test]
async fn unique_slug_returns_base_when_free() {
    let taken: HashSet<String> = HashSet::new();

    let slug = unique_slug("Big Burger!", |candidate| {
        let taken = taken.clone();
        async move { Ok::<bool, Infallible>(taken.contains(&candidate)) }
    })
    .await
    .unwrap();

    assert_eq!(slug, "big-burger");
}

#[tokio::test]
async fn unique_slug_appends_numeric_suffix_on_collision() {
    let taken: HashSet<String> = ["big-burger".to_string(), "big-burger-1".to_string()]
        .into_iter()
        .collect();

    let slug = unique_slug("Big Burger!", |candidate| {
        let taken = taken.clone();
        async move { Ok::<bool, Infallible>(taken.contains(&candidate)) }
    })
    .await
    .unwrap();

    assert_eq!(slug, "big-burger-2");
}

#[tokio::test]
async fn unique_slug_suffixes_the_fallback_base_too() {
    let taken: HashSet<String> = ["meal".to_string()].into_iter().collect();

    let slug = unique_slug("???", |candidate| {
        let taken = taken.clone();
        async move { Ok::<bool, Infallible>(taken.contains(&candidate)) }
    })
    .await
    .unwrap();

    assert_eq!(slug, "meal-1");
}

#[tokio::test]
async fn unique_slug_propagates_existence_check_errors() {
    let result: Result<String, &str> = unique_slug("Tacos", |_| async { Err("boom") }).await;

    assert_eq!(result, Err("boom"));
}

// ───── Sanitizer ────────────────────────────────────────────────────

#[test]
fn sanitize_strips_script_elements_and_their_content() {
    let out = sanitize_rich_text("<script>alert('x')</script>Preheat the oven.");
    assert_eq!(out, "Preheat the oven.");
}

#[test]
fn sanitize_removes_event_handler_attributes() {
    let out = sanitize_rich_text(r#"<img src="burger.jpg" onerror="alert(1)">"#);
    assert!(!out.contains("onerror"));
    assert!(out.contains("<img"));
}

#[test]
fn sanitize_drops_javascript_uris() {
    let out = sanitize_rich_text(r#"<a href="javascript:alert(1)">recipe</a>"#);
    assert!(!out.contains("javascript:"));
    assert!(out.contains("recipe"));
}

#[test]
fn sanitize_preserves_benign_formatting() {
    let input = "<p>Chop the <strong>onions</strong> finely.</p>";
    assert_eq!(sanitize_rich_text(input), input);
}

#[test]
fn sanitize_is_idempotent() {
    let inputs = [
        "Plain instructions, nothing fancy.",
        "<p>Mix &amp; bake for <em>30 minutes</em>.</p>",
        r#"<img src="x" onerror="alert(1)"><script>evil()</script>"#,
        r#"<a href="javascript:alert(1)">click</a>"#,
    ];

    for raw in inputs {
        let once = sanitize_rich_text(raw);
        assert_eq!(sanitize_rich_text(&once), once, "not idempotent for {raw:?}");
    }
}

// ───── Draft validation ─────────────────────────────────────────────

fn valid_draft() -> MealDraft {
    MealDraft {
        title: "Big Burger".into(),
        summary: "A juicy burger, made at home".into(),
        instructions: "<p>Grill the patty.</p>".into(),
        creator: "Maria".into(),
        creator_email: "maria@example.com".into(),
        image_bytes: vec![0xFF, 0xD8, 0xFF],
        image_file_name: "burger.jpg".into(),
    }
}

fn assert_rejected_on(draft: MealDraft, field: &str) {
    let errors = draft.validate().expect_err("draft should be rejected");
    assert!(
        errors.field_errors().contains_key(field),
        "expected a validation error on {field}, got: {errors:?}"
    );
}

#[test]
fn accepts_a_valid_draft() {
    assert!(valid_draft().validate().is_ok());
}

#[test]
fn rejects_blank_title() {
    let mut draft = valid_draft();
    draft.title = "   ".into();
    assert_rejected_on(draft, "title");
}

#[test]
fn rejects_blank_summary() {
    let mut draft = valid_draft();
    draft.summary = "".into();
    assert_rejected_on(draft, "summary");
}

#[test]
fn rejects_blank_instructions() {
    let mut draft = valid_draft();
    draft.instructions = " \n ".into();
    assert_rejected_on(draft, "instructions");
}

#[test]
fn rejects_blank_creator() {
    let mut draft = valid_draft();
    draft.creator = "".into();
    assert_rejected_on(draft, "creator");
}

#[test]
fn rejects_email_without_at_sign() {
    let mut draft = valid_draft();
    draft.creator_email = "maria.example.com".into();
    assert_rejected_on(draft, "creator_email");
}

#[test]
fn rejects_empty_image() {
    let mut draft = valid_draft();
    draft.image_bytes = Vec::new();
    assert_rejected_on(draft, "image_bytes");
}

#[test]
fn rejects_overlong_title() {
    let mut draft = valid_draft();
    draft.title = "x".repeat(200);
    assert_rejected_on(draft, "title");
}
