//! Rendering of the verification SMS text.

use crate::domain::entities::user::User;
use crate::domain::entities::verification_code::OtpCode;

/// Fill the template placeholders with the code and the account's name fields
pub fn render_message(template: &str, code: OtpCode, user: &User) -> String {
    let replacements = [
        ("%otp%", code.to_string()),
        ("%user_name%", user.login.clone()),
        ("%first_name%", user.first_name.clone()),
        ("%last_name%", user.last_name.clone()),
        ("%nickname%", user.nickname.clone()),
    ];

    replacements
        .iter()
        .fold(template.to_string(), |message, (placeholder, value)| {
            message.replace(placeholder, value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::verification::config::DEFAULT_MESSAGE_TEMPLATE;

    #[test]
    fn test_default_template() {
        let user = User::new(5, "maria");
        let code = OtpCode::new(423_891).unwrap();

        assert_eq!(
            render_message(DEFAULT_MESSAGE_TEMPLATE, code, &user),
            "This is the code to verify your phone number: 423891"
        );
    }

    #[test]
    fn test_all_placeholders() {
        let mut user = User::new(5, "maria").with_names("María", "Puig");
        user.nickname = "mpuig".to_string();
        let code = OtpCode::new(111_111).unwrap();

        let message = render_message(
            "Hola %first_name% %last_name% (%user_name%/%nickname%), codi %otp%. %otp%!",
            code,
            &user,
        );

        assert_eq!(message, "Hola María Puig (maria/mpuig), codi 111111. 111111!");
    }

    #[test]
    fn test_unknown_placeholders_left_alone() {
        let user = User::new(5, "maria");
        let code = OtpCode::new(222_222).unwrap();

        assert_eq!(render_message("%foo% %otp%", code, &user), "%foo% 222222");
    }
}
