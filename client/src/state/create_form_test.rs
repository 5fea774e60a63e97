use super::*;

fn form(title: &str, description: &str) -> CreateFormState {
    CreateFormState { title: title.to_owned(), description: description.to_owned(), ..Default::default() }
}

fn created(title: &str, description: &str) -> Roadmap {
    Roadmap {
        id: "x".to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        created_at: None,
    }
}

#[test]
fn create_form_defaults_to_idle_and_empty() {
    let s = CreateFormState::default();
    assert!(s.title.is_empty());
    assert!(s.description.is_empty());
    assert_eq!(s.phase, SubmitPhase::Idle);
    assert!(!s.is_submitting());
    assert!(s.error().is_none());
    assert!(!s.saved);
}

#[test]
fn save_with_title_enters_submitting_and_yields_draft() {
    for (title, description) in [("A", "B"), ("Learn Go", ""), (" ", "spaces count as a title")] {
        let mut s = form(title, description);
        let draft = s.begin_submit().expect("non-empty title should submit");
        assert_eq!(draft, NewRoadmap::new(title, description));
        assert!(s.is_submitting());
    }
}

#[test]
fn successful_create_clears_fields_and_returns_to_idle() {
    let mut s = form("A", "B");
    s.begin_submit().unwrap();
    let published = s.finish_submit(&Ok(created("A", "B")));
    assert_eq!(published, Some(created("A", "B")));
    assert!(s.title.is_empty());
    assert!(s.description.is_empty());
    assert_eq!(s.phase, SubmitPhase::Idle);
    assert!(s.saved);
}

#[test]
fn empty_title_is_a_no_op() {
    let mut s = form("", "description only");
    assert!(s.begin_submit().is_none());
    assert_eq!(s, form("", "description only"));
}

#[test]
fn save_while_submitting_issues_nothing() {
    let mut s = form("A", "B");
    s.begin_submit().unwrap();
    assert!(s.begin_submit().is_none());
    assert!(s.is_submitting());
}

#[test]
fn failed_create_keeps_input_and_reports_error() {
    let mut s = form("A", "B");
    s.begin_submit().unwrap();
    assert!(s.finish_submit(&Err(ApiError::Transport("offline".into()))).is_none());
    assert_eq!(s.title, "A");
    assert_eq!(s.description, "B");
    assert!(!s.is_submitting());
    assert_eq!(s.error(), Some("request failed: offline"));
}

#[test]
fn failed_form_can_retry() {
    let mut s = form("A", "B");
    s.begin_submit().unwrap();
    s.finish_submit(&Err(ApiError::Status { status: 500, message: "Internal error".into() }));

    let retry = s.begin_submit().expect("retry from failed should submit");
    assert_eq!(retry.title, "A");
    assert!(s.is_submitting());
    assert!(s.finish_submit(&Ok(created("A", "B"))).is_some());
    assert!(s.title.is_empty());
    assert_eq!(s.phase, SubmitPhase::Idle);
}

#[test]
fn editing_dismisses_error() {
    let mut s = form("A", "B");
    s.begin_submit().unwrap();
    s.finish_submit(&Err(ApiError::Transport("offline".into())));
    s.set_title("A2".into());
    assert_eq!(s.phase, SubmitPhase::Idle);
    assert_eq!(s.title, "A2");
}

#[test]
fn outcome_without_pending_submit_is_ignored() {
    let mut s = form("typed", "");
    assert!(s.finish_submit(&Ok(created("other", ""))).is_none());
    assert_eq!(s.title, "typed");
    assert_eq!(s.phase, SubmitPhase::Idle);
    assert!(!s.saved);
}

#[test]
fn saved_confirmation_clears_on_next_edit() {
    let saved = || {
        let mut s = form("A", "B");
        s.begin_submit().unwrap();
        s.finish_submit(&Ok(created("A", "B")));
        assert!(s.saved);
        s
    };

    let mut s = saved();
    s.set_title("next".into());
    assert!(!s.saved);

    let mut s = saved();
    s.set_description("next".into());
    assert!(!s.saved);
}
