use super::*;
use clinic::FieldErrors;

fn filled() -> ContactForm {
    ContactForm {
        name: "Amy".to_owned(),
        email: "amy@example.com".to_owned(),
        subject: "Parking".to_owned(),
        message: "Is there visitor parking?".to_owned(),
    }
}

#[test]
fn complete_form_passes() {
    assert_eq!(validate(&filled()), Ok(()));
}

#[test]
fn blank_or_malformed_fields_are_caught_locally() {
    let form = ContactForm { subject: "  ".to_owned(), ..filled() };
    assert_eq!(validate(&form), Err("Please fill in every field."));

    let form = ContactForm { email: "amy".to_owned(), ..filled() };
    assert_eq!(validate(&form), Err("Enter a valid email address."));
}

#[test]
fn server_field_errors_are_joined() {
    let err = ApiError::Validation(
        FieldErrors::new().with("email", "Enter a valid email address.").with("message", "This field may not be blank."),
    );
    assert_eq!(failure_message(&err), "Enter a valid email address., This field may not be blank.");

    let err = ApiError::Network("offline".to_owned());
    assert_eq!(failure_message(&err), "network error: offline");
}
