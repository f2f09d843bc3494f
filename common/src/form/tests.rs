use super::*;
use crate::requests::{
    CATEGORY_FIELD, CONTENT_FIELD, FEATURED_IMAGE_FIELD, MEDIA_FIELD, TAGS_FIELD, TITLE_FIELD,
};

type Form = ArticleForm<&'static str>;

fn politics() -> Vec<Category> {
    vec![Category {
        id: "c1".into(),
        name: "Politics".into(),
    }]
}

/// An open form with categories loaded and every required field filled.
fn filled() -> (Form, ActivationToken) {
    let mut form = Form::new();
    let token = form.open();
    assert!(form.categories_loaded(token, politics()));
    form.set_title("T".into());
    form.set_content("C".into());
    form.select_category("c1".into());
    let ticket = form.select_featured_image("cover.png");
    assert!(form.apply_preview(ticket, "data:image/png;base64,AAAA".into()));
    (form, token)
}

#[test]
fn opening_requests_a_fresh_category_list_each_time() {
    let mut form = Form::new();
    let first = form.open();
    assert!(form.categories_loaded(first, politics()));
    form.close();

    let second = form.open();
    assert_ne!(first, second);
    assert!(form.categories().is_empty());
    assert!(!form.categories_loaded(first, politics()));
    assert!(form.categories_loaded(second, politics()));
    assert_eq!(form.categories().len(), 1);
}

#[test]
fn opening_twice_keeps_the_same_activation() {
    let mut form = Form::new();
    let token = form.open();
    assert_eq!(form.open(), token);
    assert!(form.is_current(token));
}

#[test]
fn category_failure_sets_fixed_message() {
    let mut form = Form::new();
    let token = form.open();
    assert!(form.categories_failed(token));
    assert!(form.categories().is_empty());
    assert_eq!(
        form.status().error.as_deref(),
        Some(messages::CATEGORIES_FETCH_FAILED)
    );
}

#[test]
fn late_category_results_after_close_are_dropped() {
    let mut form = Form::new();
    let token = form.open();
    form.close();
    assert!(!form.categories_loaded(token, politics()));
    assert!(!form.categories_failed(token));
    assert!(form.categories().is_empty());
    assert!(form.status().error.is_none());
}

#[test]
fn selecting_a_category_keeps_exactly_one() {
    let mut form = Form::new();
    form.select_category("c1".into());
    form.select_category("c2".into());
    assert_eq!(form.draft().category_id.as_deref(), Some("c2"));
    form.select_category(String::new());
    assert!(form.draft().category_id.is_none());
}

#[test]
fn new_featured_image_replaces_file_and_preview() {
    let (mut form, _) = filled();
    let ticket = form.select_featured_image("second.png");
    assert_eq!(form.draft().featured_image, Some("second.png"));
    assert!(form.preview().is_none());

    assert!(form.apply_preview(ticket, "data:second".into()));
    assert_eq!(form.preview(), Some("data:second"));
}

#[test]
fn slow_preview_of_an_older_selection_is_ignored() {
    let mut form = Form::new();
    form.open();
    let first = form.select_featured_image("first.png");
    let second = form.select_featured_image("second.png");

    assert!(form.apply_preview(second, "data:second".into()));
    assert!(!form.apply_preview(first, "data:first".into()));
    assert_eq!(form.preview(), Some("data:second"));
}

#[test]
fn removing_the_image_clears_both_and_ignores_pending_read() {
    let mut form = Form::new();
    form.open();
    let ticket = form.select_featured_image("cover.png");
    form.remove_featured_image();
    assert!(!form.apply_preview(ticket, "data:cover".into()));
    assert!(form.draft().featured_image.is_none());
    assert!(form.preview().is_none());
}

#[test]
fn preview_interrupted_by_close_is_read_again_on_reopen() {
    let mut form = Form::new();
    form.open();
    let ticket = form.select_featured_image("cover.png");
    form.close();
    assert!(!form.apply_preview(ticket, "data:cover".into()));

    form.open();
    let (ticket, file) = form.missing_preview().expect("preview to redo");
    assert_eq!(file, "cover.png");
    assert!(form.apply_preview(ticket, "data:cover".into()));
    assert!(form.missing_preview().is_none());
}

#[test]
fn media_selection_replaces_previous_files() {
    let mut form = Form::new();
    form.select_media(vec!["a.png", "b.png"]);
    form.select_media(vec!["c.png"]);
    assert_eq!(form.draft().media, vec!["c.png"]);
    form.select_media(Vec::new());
    assert!(form.draft().media.is_empty());
}

#[test]
fn validation_reports_first_missing_field() {
    let mut form = Form::new();
    let token = form.open();
    assert_eq!(form.validate(), Err(FormError::MissingTitle));
    form.set_title("   ".into());
    assert_eq!(form.validate(), Err(FormError::MissingTitle));
    form.set_title("T".into());
    assert_eq!(form.validate(), Err(FormError::MissingContent));
    form.set_content("C".into());
    assert_eq!(form.validate(), Err(FormError::MissingCategory));
    form.select_category("c1".into());
    assert_eq!(form.validate(), Err(FormError::MissingImage));
    assert_eq!(form.begin_submit(token), Err(FormError::MissingImage));
    assert!(!form.status().loading);

    form.select_featured_image("cover.png");
    assert_eq!(form.validate(), Ok(()));
    form.remove_featured_image();
    assert_eq!(form.validate(), Err(FormError::MissingImage));
}

#[test]
fn submission_builds_the_expected_payload() {
    let (mut form, token) = filled();
    let upload = form.begin_submit(token).expect("valid form");

    assert!(form.status().loading);
    assert_eq!(upload.texts(TITLE_FIELD), vec!["T"]);
    assert_eq!(upload.texts(CONTENT_FIELD), vec!["C"]);
    assert_eq!(upload.texts(CATEGORY_FIELD), vec!["c1"]);
    assert!(upload.texts(TAGS_FIELD).is_empty());
    assert_eq!(upload.files(FEATURED_IMAGE_FIELD), vec![&"cover.png"]);
    assert!(upload.files(MEDIA_FIELD).is_empty());
}

#[test]
fn submission_carries_tags_and_media() {
    let (mut form, token) = filled();
    form.set_tags("سياسة، , economy ,world".into());
    form.select_media(vec!["m1.png", "m2.png"]);
    let upload = form.begin_submit(token).unwrap();
    assert_eq!(upload.texts(TAGS_FIELD), vec!["سياسة،", "economy", "world"]);
    assert_eq!(upload.files(MEDIA_FIELD), vec![&"m1.png", &"m2.png"]);
}

#[test]
fn a_second_submit_is_refused_while_in_flight() {
    let (mut form, token) = filled();
    form.begin_submit(token).unwrap();
    assert_eq!(form.begin_submit(token), Err(FormError::InFlight));
}

#[test]
fn beginning_a_submit_clears_previous_feedback() {
    let (mut form, token) = filled();
    form.begin_submit(token).unwrap();
    assert!(form.submit_failed(token));
    assert!(form.status().error.is_some());

    form.begin_submit(token).unwrap();
    assert_eq!(
        form.status(),
        &FormStatus {
            loading: true,
            error: None,
            success: None
        }
    );
}

#[test]
fn failed_submit_keeps_every_field() {
    let (mut form, token) = filled();
    form.set_tags("a, b".into());
    form.select_media(vec!["m.png"]);
    let before = form.draft().clone();

    form.begin_submit(token).unwrap();
    assert!(form.submit_failed(token));

    assert_eq!(form.draft(), &before);
    assert_eq!(form.preview(), Some("data:image/png;base64,AAAA"));
    assert!(!form.status().loading);
    assert_eq!(
        form.status().error.as_deref(),
        Some(messages::ARTICLE_ADD_FAILED)
    );
}

#[test]
fn successful_submit_resets_after_the_delay() {
    let (mut form, token) = filled();
    form.set_tags("a".into());
    form.begin_submit(token).unwrap();

    assert_eq!(form.submit_succeeded(token), None);
    assert!(!form.status().loading);
    assert_eq!(form.status().success.as_deref(), Some(messages::ARTICLE_ADDED));
    // Fields stay visible until the delay elapses.
    assert_eq!(form.draft().title, "T");
    assert_eq!(form.begin_submit(token), Err(FormError::InFlight));

    assert_eq!(form.finish_success(token), SuccessAction::NotifyAndClose);
    assert_eq!(form.draft(), &ArticleDraft::default());
    assert!(form.preview().is_none());
    assert!(form.status().success.is_none());
}

#[test]
fn closing_during_the_delay_resets_and_still_notifies() {
    let (mut form, token) = filled();
    form.begin_submit(token).unwrap();
    assert_eq!(form.submit_succeeded(token), None);

    form.close();
    assert_eq!(form.draft(), &ArticleDraft::default());
    assert!(form.preview().is_none());

    let reopened = form.open();
    form.set_title("next".into());
    assert_eq!(form.finish_success(token), SuccessAction::NotifyOnly);
    assert_eq!(form.draft().title, "next");
    assert!(form.is_current(reopened));
}

#[test]
fn success_landing_after_close_only_notifies() {
    let (mut form, token) = filled();
    form.begin_submit(token).unwrap();
    form.close();

    assert_eq!(form.submit_succeeded(token), Some(SuccessAction::NotifyOnly));
    assert_eq!(form.draft(), &ArticleDraft::default());
    assert!(form.status().success.is_none());
}

#[test]
fn failure_landing_after_close_is_dropped() {
    let (mut form, token) = filled();
    form.begin_submit(token).unwrap();
    form.close();

    assert!(!form.submit_failed(token));
    assert!(form.status().error.is_none());
    assert!(!form.status().loading);
    assert_eq!(form.draft().title, "T");
}

#[test]
fn submit_with_stale_token_is_refused() {
    let (mut form, token) = filled();
    form.close();
    form.open();
    assert_eq!(form.begin_submit(token), Err(FormError::Stale));
}

#[test]
fn reopening_while_a_submit_is_on_the_wire_refuses_a_second_one() {
    let (mut form, token) = filled();
    form.begin_submit(token).unwrap();
    form.close();

    let reopened = form.open();
    assert!(form.status().loading);
    assert_eq!(form.begin_submit(reopened), Err(FormError::InFlight));

    assert!(form.submit_failed(token));
    assert!(!form.status().loading);
    assert_eq!(
        form.status().error.as_deref(),
        Some(messages::ARTICLE_ADD_FAILED)
    );
    assert!(form.begin_submit(reopened).is_ok());
}

#[test]
fn success_landing_after_reopen_keeps_new_edits() {
    let (mut form, token) = filled();
    form.begin_submit(token).unwrap();
    form.close();
    form.open();
    form.set_title("edited after reopen".into());

    assert_eq!(form.submit_succeeded(token), Some(SuccessAction::NotifyOnly));
    assert_eq!(form.draft().title, "edited after reopen");
    assert!(form.is_open());
    assert!(!form.status().loading);
    assert_eq!(form.status().success.as_deref(), Some(messages::ARTICLE_ADDED));
}

#[test]
fn whitespace_only_fields_show_the_required_message() {
    let (mut form, token) = filled();
    form.set_title("   ".into());

    let refused = form.begin_submit(token);
    assert_eq!(refused, Err(FormError::MissingTitle));
    assert!(refused.unwrap_err().is_validation());
    assert!(!form.status().loading);
    assert_eq!(
        form.status().error.as_deref(),
        Some(messages::REQUIRED_FIELDS_MISSING)
    );

    form.set_title("T".into());
    form.begin_submit(token).unwrap();
    assert!(form.status().error.is_none());
}

#[test]
fn repeated_submit_clicks_produce_a_single_upload() {
    let (mut form, token) = filled();
    let uploads = (0..3).filter(|_| form.begin_submit(token).is_ok()).count();
    assert_eq!(uploads, 1);

    assert_eq!(form.submit_succeeded(token), None);
    assert_eq!(form.begin_submit(token), Err(FormError::InFlight));
    assert!(!FormError::InFlight.is_validation());
}

#[test]
fn answer_for_an_unknown_submission_is_ignored() {
    let (mut form, token) = filled();
    assert!(!form.submit_failed(token));
    assert!(form.status().error.is_none());
}
