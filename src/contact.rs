use url::form_urlencoded;

pub const INSTAGRAM_URL: &str = "https://www.instagram.com/aamir.naqvii/";
pub const INSTAGRAM_HANDLE: &str = "@aamir.naqvii";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FieldError {
    Missing,
    InvalidEmail,
}

impl FieldError {
    pub fn message(self, field: ContactField) -> &'static str {
        match (self, field) {
            (Self::Missing, ContactField::Name) => "Please tell me your name.",
            (Self::Missing, ContactField::Email) => "I need an email address to reply to.",
            (Self::Missing, ContactField::Message) => "Describe your project in a few words.",
            (Self::InvalidEmail, _) => "That email address does not look right.",
        }
    }
}

#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ContactMessage {
    name: String,
    email: String,
    message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<ContactMessage, Vec<(ContactField, FieldError)>> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        let mut errors = Vec::new();

        if name.is_empty() {
            errors.push((ContactField::Name, FieldError::Missing));
        }
        if email.is_empty() {
            errors.push((ContactField::Email, FieldError::Missing));
        } else if !is_plausible_email(email) {
            errors.push((ContactField::Email, FieldError::InvalidEmail));
        }
        if message.is_empty() {
            errors.push((ContactField::Message, FieldError::Missing));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

impl ContactMessage {
    pub fn subject(&self) -> String {
        format!("Project inquiry from {}", self.name)
    }

    pub fn body(&self) -> String {
        format!("{}\n\n{}\n{}", self.message, self.name, self.email)
    }

    pub fn mailto_href(&self, to: &str) -> String {
        format!(
            "mailto:{to}?subject={}&body={}",
            percent_encode(&self.subject()),
            percent_encode(&self.body())
        )
    }
}

pub fn is_plausible_email(value: &str) -> bool {
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    !local.is_empty()
        && !value.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, suffix)| !host.is_empty() && !suffix.is_empty() && !suffix.ends_with('.'))
}

// Form encoding writes spaces as `+`, which mail clients show literally.
fn percent_encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: " Maya ".to_string(),
            email: "maya@studio.example".to_string(),
            message: "Need a 30s cut + captions".to_string(),
        }
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = ContactForm::default().validate().expect_err("empty form is invalid");

        assert_eq!(
            errors,
            vec![
                (ContactField::Name, FieldError::Missing),
                (ContactField::Email, FieldError::Missing),
                (ContactField::Message, FieldError::Missing),
            ]
        );
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["maya", "maya@", "@studio.com", "maya@studio", "a@b@c.com", "ma ya@x.com", "maya@x."] {
            let mut form = filled();
            form.set(ContactField::Email, email.to_string());

            assert_eq!(
                form.validate().expect_err(email),
                vec![(ContactField::Email, FieldError::InvalidEmail)],
                "{email}"
            );
        }
    }

    #[test]
    fn valid_form_is_trimmed() {
        let message = filled().validate().expect("valid form");

        assert_eq!(message.subject(), "Project inquiry from Maya");
        assert!(message.body().ends_with("Maya\nmaya@studio.example"));
    }

    #[test]
    fn mailto_is_percent_encoded() {
        let href = filled().validate().expect("valid form").mailto_href("hello@editor.example");

        assert!(href.starts_with("mailto:hello@editor.example?subject=Project%20inquiry%20from%20Maya&body="));
        assert!(href.contains("30s%20cut%20%2B%20captions"));
        assert!(href.contains("%0A%0A"));
        assert!(!href.contains('+'));
    }
}
