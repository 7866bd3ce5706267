//! Contact form submissions through the shell.

use folio_shell::contact::{FAILURE_MESSAGE, SENDING_LABEL, SUCCESS_MESSAGE, SUBMIT_LABEL};
use folio_shell::view::PageView;
use folio_shell::{Error, Shell, SubmitStatus};

use crate::common::{MockTransport, TestHarness, fill_contact};

fn contact_view(shell: &mut Shell) -> folio_shell::view::ContactView {
    match &shell.frame().page {
        PageView::Contact(view) => view.clone(),
        other => unreachable!("Expected contact page, got {:?}", other.route()),
    }
}

#[tokio::test]
async fn test_successful_send_clears_form_and_shows_modal() {
    let harness = TestHarness::new();
    let mut shell = harness.open_shell();
    shell.navigate("/contact");
    fill_contact(&mut shell, "ada@example.com");
    assert!(contact_view(&mut shell).can_submit);

    let transport = MockTransport::with_status(200);
    shell.submit_contact(&transport).await.unwrap();

    assert_eq!(transport.calls(), 1);
    assert_eq!(transport.sent.lock().unwrap()[0].email, "ada@example.com");
    let view = contact_view(&mut shell);
    assert_eq!(view.modal, Some(SUCCESS_MESSAGE));
    assert!(view.fields.name.is_empty());
    assert_eq!(view.submit_label, SUBMIT_LABEL);

    shell.dismiss_modal();
    assert_eq!(contact_view(&mut shell).modal, None);
}

#[tokio::test]
async fn test_failed_send_keeps_fields_and_shows_error() {
    let harness = TestHarness::new();
    let mut shell = harness.open_shell();
    shell.navigate("/contact");
    fill_contact(&mut shell, "ada@example.com");

    let transport = MockTransport::with_status(500);
    let err = shell.submit_contact(&transport).await.unwrap_err();
    assert!(matches!(err, Error::Transport { status: Some(500), .. }));

    assert_eq!(transport.calls(), 1);
    assert_eq!(shell.contact_form().status(), &SubmitStatus::Failed);
    let view = contact_view(&mut shell);
    assert_eq!(view.error, Some(FAILURE_MESSAGE));
    assert_eq!(view.fields.name, "Ada");
    assert_eq!(view.modal, None);
}

#[tokio::test]
async fn test_invalid_email_is_never_sent() {
    let harness = TestHarness::new();
    let mut shell = harness.open_shell();
    shell.navigate("/contact");
    fill_contact(&mut shell, "not-an-email");

    let view = contact_view(&mut shell);
    assert!(!view.can_submit);
    assert_eq!(view.email_hint, Some("Invalid email address"));

    let transport = MockTransport::with_status(200);
    let err = shell.submit_contact(&transport).await.unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
    assert_eq!(transport.calls(), 0);
    assert_eq!(shell.contact_form().status(), &SubmitStatus::Idle);
}

#[tokio::test]
async fn test_submit_only_from_contact_page() {
    let harness = TestHarness::new();
    let mut shell = harness.open_shell();
    fill_contact(&mut shell, "ada@example.com");

    let transport = MockTransport::with_status(200);
    assert!(shell.submit_contact(&transport).await.is_err());
    assert_eq!(transport.calls(), 0);
}

#[test]
fn test_sending_label_while_in_flight() {
    let mut form = folio_shell::ContactForm::new();
    form.set_field(folio_core::Field::Name, "Ada");
    form.set_field(folio_core::Field::Email, "ada@example.com");
    form.set_field(folio_core::Field::Subject, "Hi");
    form.set_field(folio_core::Field::Body, "Body");
    form.begin_submit().unwrap();
    assert_eq!(form.submit_label(), SENDING_LABEL);
}

#[test]
fn test_upload_failure_surfaces_inline() {
    let harness = TestHarness::new();
    let mut shell = harness.open_shell();
    shell.navigate("/contact");
    shell.report_upload_error(&Error::transport("upload timed out"));
    assert_eq!(contact_view(&mut shell).error, Some("Image upload failed"));

    shell.insert_image("https://cdn.example/a.png");
    let view = contact_view(&mut shell);
    assert_eq!(view.error, None);
    assert!(view.fields.body.contains("https://cdn.example/a.png"));
}
