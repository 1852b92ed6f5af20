use std::borrow::Cow;

use validator::ValidationError;

use crate::domain::models::identifier;

pub fn is_identifier(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.len() > 255 {
        return Err(ValidationError::new("0").with_message(Cow::from(
            "Identifier must contain between 1 and 255 characters",
        )));
    }

    Ok(())
}

pub fn is_password(password: &str) -> Result<(), ValidationError> {
    if password.len() < 8 || password.len() > 72 {
        return Err(ValidationError::new("0").with_message(Cow::from(
            "Password must contain between 8 and 72 characters",
        )));
    }

    Ok(())
}

pub fn is_email(email: &str) -> Result<(), ValidationError> {
    if email.len() < 3 || email.len() > 255 {
        return Err(ValidationError::new("0")
            .with_message(Cow::from("Email must contain between 3 and 255 characters")));
    }

    if !identifier::is_email(email) {
        return Err(ValidationError::new("0").with_message(Cow::from("Invalid email format")));
    }

    Ok(())
}

pub fn is_code(code: &str) -> Result<(), ValidationError> {
    if code.is_empty() {
        return Err(ValidationError::new("0").with_message(Cow::from("Code is required")));
    }

    Ok(())
}
