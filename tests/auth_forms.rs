#[cfg(test)]
mod tests {
    use taskmaster::libs::auth::{ActiveForm, AuthForms, AuthMode, LoginForm, RegisterForm};
    use taskmaster::libs::messages::Message;

    fn valid_registration() -> RegisterForm {
        RegisterForm {
            fullname: "Ann Lee".to_string(),
            username: "ann".to_string(),
            password1: "Secret_99!".to_string(),
            password2: "Secret_99!".to_string(),
        }
    }

    fn messages_for(form: &RegisterForm, field: &str) -> Vec<Message> {
        form.validate()
            .into_iter()
            .filter(|issue| issue.field == field)
            .map(|issue| issue.message)
            .collect()
    }

    #[test]
    fn test_toggle_tears_down_previous_form() {
        let mut forms = AuthForms::new();
        assert_eq!(forms.mode(), None);

        assert_eq!(forms.toggle(AuthMode::Login), None);
        forms.login_mut().unwrap().username = "ann".to_string();

        let previous = forms.toggle(AuthMode::Register);
        assert!(matches!(previous, Some(ActiveForm::Login(LoginForm { ref username, .. })) if username == "ann"));
        assert_eq!(forms.mode(), Some(AuthMode::Register));
        assert!(forms.login_mut().is_none());
        assert_eq!(forms.register_mut().unwrap(), &RegisterForm::default());
    }

    #[test]
    fn test_toggle_back_gives_a_fresh_form() {
        let mut forms = AuthForms::new();
        forms.toggle(AuthMode::Login);
        forms.login_mut().unwrap().password = "typed".to_string();
        forms.toggle(AuthMode::Register);
        forms.toggle(AuthMode::Login);

        assert_eq!(forms.login_mut().unwrap(), &LoginForm::default());
    }

    #[test]
    fn test_teardown_detaches_everything() {
        let mut forms = AuthForms::new();
        forms.toggle(AuthMode::Register);

        assert!(matches!(forms.teardown(), Some(ActiveForm::Register(_))));
        assert_eq!(forms.mode(), None);
        assert!(forms.active().is_none());
        assert!(forms.validate().is_empty());
        assert!(forms.teardown().is_none());
    }

    #[test]
    fn test_login_requires_both_fields() {
        let issues = LoginForm::default().validate();
        let fields: Vec<_> = issues.iter().map(|issue| issue.field).collect();
        assert_eq!(fields, vec!["username", "password"]);
        assert_eq!(issues[0].message.to_string(), "Please enter your username");
    }

    #[test]
    fn test_valid_registration_passes() {
        assert!(valid_registration().validate().is_empty());
    }

    #[test]
    fn test_fullname_letters_and_spaces_only() {
        let mut form = valid_registration();
        form.fullname = "Ann L33".to_string();
        assert_eq!(messages_for(&form, "fullname"), vec![Message::FullnameLettersOnly]);

        form.fullname = "   ".to_string();
        assert_eq!(messages_for(&form, "fullname"), vec![Message::FullnameRequired]);
    }

    #[test]
    fn test_password_rules_report_first_failure() {
        let cases = [
            ("", Message::PasswordRequired),
            ("Ab1_", Message::PasswordTooShort),
            ("secret_99", Message::PasswordNeedsUppercase),
            ("SECRET_99", Message::PasswordNeedsLowercase),
            ("Secret_xx", Message::PasswordNeedsDigit),
            ("Secret999", Message::PasswordNeedsSymbol),
        ];
        for (password, expected) in cases {
            let mut form = valid_registration();
            form.password1 = password.to_string();
            form.password2 = password.to_string();
            assert_eq!(messages_for(&form, "password1"), vec![expected], "password {:?}", password);
        }
    }

    #[test]
    fn test_underscore_is_not_a_symbol() {
        let mut form = valid_registration();
        form.password1 = "Secret_99".to_string();
        form.password2 = "Secret_99".to_string();
        assert_eq!(messages_for(&form, "password1"), vec![Message::PasswordNeedsSymbol]);
    }

    #[test]
    fn test_confirmation_must_match() {
        let mut form = valid_registration();
        form.password2 = "Secret_98!".to_string();
        assert_eq!(messages_for(&form, "password2"), vec![Message::PasswordsDoNotMatch]);

        form.password2.clear();
        assert_eq!(messages_for(&form, "password2"), vec![Message::ConfirmPasswordRequired]);
    }
}
