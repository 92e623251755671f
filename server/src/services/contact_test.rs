use super::*;

fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
    ContactSubmission { name: name.into(), email: email.into(), message: message.into() }
}

#[test]
fn subject_names_the_sender() {
    assert_eq!(inquiry_subject("Priya Mehta"), "New Project Inquiry from Priya Mehta");
}

#[test]
fn subject_flattens_line_breaks() {
    assert_eq!(inquiry_subject("Eve\r\nBcc: x@y.z"), "New Project Inquiry from Eve  Bcc: x@y.z");
}

#[test]
fn escape_html_covers_markup_characters() {
    assert_eq!(escape_html(r#"<b>"Tom" & 'Jerry'</b>"#), "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn template_fills_every_placeholder() {
    let html = render_contact_template(&submission("Asha", "asha@example.com", "A cafe site"));
    assert!(html.contains("Asha"));
    assert!(html.contains("asha@example.com"));
    assert!(html.contains("A cafe site"));
    assert!(!html.contains("{{"));
}

#[test]
fn template_escapes_submitted_fields() {
    let html = render_contact_template(&submission("<script>", "a@b.co", "1 < 2 && 3 > 2"));
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("1 &lt; 2 &amp;&amp; 3 &gt; 2"));
}

#[test]
fn resend_mailer_keeps_configured_addresses() {
    let mailer = ResendMailer::new(&MailConfig {
        api_key: "re_test".into(),
        from: "Studio <hi@studio.test>".into(),
        to: vec!["a@studio.test".into(), "b@studio.test".into()],
    });
    assert_eq!(mailer.from, "Studio <hi@studio.test>");
    assert_eq!(mailer.to.len(), 2);
}

#[test]
fn delivery_error_mentions_provider_message() {
    let err = ContactError::Delivery("rate limited by provider".into());
    assert_eq!(err.to_string(), "email delivery failed: rate limited by provider");
}
