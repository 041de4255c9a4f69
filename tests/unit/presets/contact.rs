use super::*;

#[test]
fn valid_form_builds_a_script() {
    let form = ContactForm::new("Ada", "ada@example.com", "Hello there");
    form.validate().unwrap();
    let lines = form.response_lines();
    assert_eq!(lines.len(), 5);
    assert!(lines[1].contains("Ada <ada@example.com>"));
    assert!(lines[2].contains("11 characters"));

    let script = form.into_script(TerminalConfig::default()).unwrap();
    assert_eq!(script.line_count(), 5);
}

#[test]
fn missing_fields_are_reported() {
    let cases = [
        (ContactForm::new(" ", "a@b.co", "hi"), "name"),
        (ContactForm::new("A", "a@b.co", "\n"), "message"),
        (ContactForm::new("A", "not-an-email", "hi"), "email"),
    ];
    for (form, field) in cases {
        let err = form.validate().unwrap_err();
        assert!(err.to_string().contains(field), "{err}");
    }
}

#[test]
fn email_check_is_loose_but_not_empty() {
    assert!(looks_like_email("x@y.z"));
    assert!(looks_like_email("first.last@sub.example.org"));
    assert!(!looks_like_email("@y.z"));
    assert!(!looks_like_email("x@y"));
    assert!(!looks_like_email("x@.z"));
    assert!(!looks_like_email("x@@y.z"));
    assert!(!looks_like_email("x y@z.io"));
}
