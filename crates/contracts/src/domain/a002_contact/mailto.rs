use super::form::ContactMessage;

/// Build the `mailto:` URL that opens the visitor's mail client with the
/// message prefilled. User-supplied values are percent-encoded; `%0A` is a
/// literal line break in the body.
pub fn mailto_link(recipient: &str, message: &ContactMessage) -> String {
    let name = urlencoding::encode(&message.name);
    let email = urlencoding::encode(&message.email);
    let body = urlencoding::encode(&message.message);

    format!(
        "mailto:{recipient}?subject=Novo Contato de {name}&body=Nome: {name}%0AE-mail: {email}%0A%0AMensagem:%0A{body}"
    )
}

impl ContactMessage {
    pub fn mailto_link(&self, recipient: &str) -> String {
        mailto_link(recipient, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(name: &str, email: &str, text: &str) -> ContactMessage {
        ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: text.to_string(),
        }
    }

    #[test]
    fn test_mailto_layout() {
        let link = message("Ana", "ana@example.com", "Oi").mailto_link("contato@montevi.com.br");
        assert_eq!(
            link,
            "mailto:contato@montevi.com.br?subject=Novo Contato de Ana&body=Nome: Ana%0AE-mail: ana%40example.com%0A%0AMensagem:%0AOi"
        );
    }

    #[test]
    fn test_mailto_encodes_user_input() {
        let link = mailto_link(
            "x@y.z",
            &message("João & Maria", "j@m.br", "linha 1\nlinha 2?"),
        );
        assert!(link.contains("subject=Novo Contato de Jo%C3%A3o%20%26%20Maria&"));
        assert!(link.ends_with("Mensagem:%0Alinha%201%0Alinha%202%3F"));
        assert_eq!(link.matches('&').count(), 1, "only the body separator stays raw");
    }
}
