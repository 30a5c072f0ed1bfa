use gloo_timers::callback::Timeout;
use log::info;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::icons::social_icon;
use crate::components::reveal::{reveal_classes, use_in_view, RevealThreshold};
use crate::components::timer::TimerSlot;
use crate::config;
use crate::content::{mailto_uri, tel_uri, CONTACT_EMAIL, CONTACT_LOCATION, CONTACT_PHONE, SOCIAL_LINKS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

/// Local state of the message form. Nothing is ever sent anywhere.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }

    /// Accepts the message and clears the form, or leaves it untouched.
    pub fn submit(&mut self) -> bool {
        if !self.is_submittable() {
            return false;
        }
        *self = ContactForm::default();
        true
    }
}

/// Submits `form` and, when accepted, arms the acknowledgment reset built by
/// `reset`. A pending reset from an earlier submit is cancelled.
pub fn submit_and_acknowledge<T>(
    form: &mut ContactForm,
    ack: &TimerSlot<T>,
    reset: impl FnOnce() -> T,
) -> bool {
    if !form.submit() {
        return false;
    }
    ack.arm(reset());
    true
}

struct TextInput {
    label: &'static str,
    field: Field,
    placeholder: &'static str,
    kind: &'static str,
}

static INPUTS: [TextInput; 3] = [
    TextInput { label: "Full Name", field: Field::Name, placeholder: "John Doe", kind: "text" },
    TextInput { label: "Email Address", field: Field::Email, placeholder: "john@example.com", kind: "email" },
    TextInput { label: "Subject", field: Field::Subject, placeholder: "Event Inquiry", kind: "text" },
];

#[function_component(Contact)]
pub fn contact() -> Html {
    let (node, visible) = use_in_view(RevealThreshold::default());
    let form = use_state(ContactForm::default);
    let sent = use_state_eq(|| false);
    let ack_timer = use_memo(|_| TimerSlot::<Timeout>::new(), ());

    {
        let ack_timer = (*ack_timer).clone();
        use_effect_with_deps(move |_| move || ack_timer.cancel(), ());
    }

    let update = |field: Field| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
        }
    };

    let submit = {
        let form = form.clone();
        let sent = sent.clone();
        let ack_timer = (*ack_timer).clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            let reset = {
                let sent = sent.clone();
                move || Timeout::new(config::CONTACT_ACK_MS, move || sent.set(false))
            };
            if !submit_and_acknowledge(&mut next, &ack_timer, reset) {
                return;
            }
            info!("contact message accepted");
            form.set(next);
            sent.set(true);
        })
    };

    let on_message = {
        let update = update(Field::Message);
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            update(area.value());
        })
    };

    html! {
        <section id="contact" class="contact" ref={node}>
            <style>
                {r#"
                    .contact {
                        padding: 5rem 1.25rem;
                        background: #fff;
                        font-family: 'DM Sans', sans-serif;
                    }
                    .contact-inner {
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 3rem;
                        align-items: start;
                    }
                    .contact h2 {
                        font-family: 'Playfair Display', serif;
                        font-size: clamp(2rem, 6vw, 3rem);
                        font-weight: 800;
                        color: #1a1a2e;
                        margin-bottom: 1rem;
                    }
                    .contact-lead {
                        color: #6b7280;
                        line-height: 1.7;
                        margin-bottom: 2rem;
                    }
                    .contact-item {
                        display: flex;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                    }
                    .contact-item-icon {
                        width: 44px;
                        height: 44px;
                        border-radius: 12px;
                        background: rgba(201, 168, 76, 0.1);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.1rem;
                        flex-shrink: 0;
                    }
                    .contact-item-label {
                        font-weight: 700;
                        color: #1a1a2e;
                        font-size: 0.9rem;
                        margin-bottom: 0.2rem;
                    }
                    .contact-item a {
                        color: #C9A84C;
                        font-size: 0.85rem;
                        text-decoration: none;
                    }
                    .contact-item span {
                        color: #6b7280;
                        font-size: 0.85rem;
                    }
                    .contact-social {
                        margin-top: 2rem;
                        padding-top: 1.5rem;
                        border-top: 1px solid rgba(0, 0, 0, 0.07);
                    }
                    .contact-social p {
                        font-size: 0.85rem;
                        color: #9ca3af;
                        margin-bottom: 0.75rem;
                    }
                    .contact-social-links {
                        display: flex;
                        gap: 0.6rem;
                    }
                    .contact-social-links a {
                        width: 40px;
                        height: 40px;
                        border-radius: 12px;
                        border: 1.5px solid rgba(0, 0, 0, 0.1);
                        background: #f9f8f6;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #374151;
                        transition: all 0.2s;
                    }
                    .contact-social-links a:hover {
                        border-color: #C9A84C;
                        color: #C9A84C;
                    }
                    .contact-form {
                        background: #f9f8f6;
                        border-radius: 24px;
                        padding: 2rem;
                        border: 1px solid rgba(0, 0, 0, 0.06);
                    }
                    .contact-form h3 {
                        font-weight: 700;
                        color: #1a1a2e;
                        font-size: 1.2rem;
                        margin-bottom: 1.5rem;
                    }
                    .form-field {
                        margin-bottom: 1rem;
                    }
                    .form-field.last {
                        margin-bottom: 1.5rem;
                    }
                    .form-field label {
                        font-weight: 600;
                        font-size: 0.83rem;
                        color: #374151;
                        display: block;
                        margin-bottom: 0.4rem;
                    }
                    .form-field input, .form-field textarea {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        border-radius: 12px;
                        border: 1.5px solid rgba(0, 0, 0, 0.1);
                        font-family: 'DM Sans', sans-serif;
                        font-size: 0.88rem;
                        outline: none;
                        transition: border-color 0.2s;
                        background: #fff;
                    }
                    .form-field textarea {
                        resize: vertical;
                    }
                    .form-field input:focus, .form-field textarea:focus {
                        border-color: #C9A84C;
                    }
                    .contact-submit {
                        width: 100%;
                        padding: 1rem;
                        font-weight: 700;
                        font-size: 0.95rem;
                        transition: all 0.3s;
                    }
                    .contact-submit.sent {
                        background: linear-gradient(135deg, #16a34a, #15803d);
                    }
                "#}
            </style>
            <div class={classes!("contact-inner", reveal_classes(visible, "rise"))}>
                <div class="contact-grid">
                    <div>
                        <h2>{"Get In Touch"}</h2>
                        <p class="contact-lead">
                            {"Have questions about our events? Want to become a sponsor or partner? We'd love to hear from you!"}
                        </p>
                        <div class="contact-item">
                            <div class="contact-item-icon">{"✉️"}</div>
                            <div>
                                <div class="contact-item-label">{"Email"}</div>
                                <a href={mailto_uri(CONTACT_EMAIL)}>{ CONTACT_EMAIL }</a>
                            </div>
                        </div>
                        <div class="contact-item">
                            <div class="contact-item-icon">{"📞"}</div>
                            <div>
                                <div class="contact-item-label">{"Phone"}</div>
                                <a href={tel_uri(CONTACT_PHONE)}>{ CONTACT_PHONE }</a>
                            </div>
                        </div>
                        <div class="contact-item">
                            <div class="contact-item-icon">{"📍"}</div>
                            <div>
                                <div class="contact-item-label">{"Location"}</div>
                                <span>{ CONTACT_LOCATION }</span>
                            </div>
                        </div>
                        <div class="contact-social">
                            <p>{"Follow us on social media:"}</p>
                            <div class="contact-social-links">
                                { for SOCIAL_LINKS.iter().map(|link| html! {
                                    <a href={link.url} target="_blank" rel="noopener noreferrer" aria-label={link.name}>
                                        { social_icon(link.network, 18) }
                                    </a>
                                }) }
                            </div>
                        </div>
                    </div>
                    <div class="contact-form">
                        <h3>{"Send Us a Message"}</h3>
                        { for INPUTS.iter().map(|text| {
                            let update = update(text.field);
                            let oninput = Callback::from(move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                update(input.value());
                            });
                            html! {
                                <div class="form-field">
                                    <label>{ text.label }</label>
                                    <input
                                        type={text.kind}
                                        name={text.field.name()}
                                        value={form.get(text.field).to_string()}
                                        placeholder={text.placeholder}
                                        {oninput}
                                    />
                                </div>
                            }
                        }) }
                        <div class="form-field last">
                            <label>{"Message"}</label>
                            <textarea
                                name={Field::Message.name()}
                                rows="4"
                                value={form.message.clone()}
                                placeholder="Tell us about your inquiry..."
                                oninput={on_message}
                            />
                        </div>
                        <button type="button" class={classes!("gold-button", "contact-submit", (*sent).then_some("sent"))} onclick={submit}>
                            { if *sent { "✓ Message Sent!" } else { "Send Message" } }
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::timer::fake::{CancelLog, FakeTimer};

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Wambui".to_string());
        form.set(Field::Email, "wambui@example.com".to_string());
        form.set(Field::Subject, "Vienna Loop".to_string());
        form.set(Field::Message, "Is there a 10k option?".to_string());
        form
    }

    #[test]
    fn fields_round_through_get_and_set() {
        let form = filled();
        assert_eq!(form.get(Field::Name), "Wambui");
        assert_eq!(form.get(Field::Subject), "Vienna Loop");
    }

    #[test]
    fn submit_clears_an_accepted_form() {
        let mut form = filled();
        assert!(form.submit());
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn name_and_email_are_required() {
        let mut form = filled();
        form.set(Field::Email, "   ".to_string());
        let before = form.clone();
        assert!(!form.submit());
        assert_eq!(form, before);

        let mut form = filled();
        form.set(Field::Name, String::new());
        assert!(!form.submit());
    }

    #[test]
    fn subject_and_message_are_optional() {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Peter".to_string());
        form.set(Field::Email, "peter@example.com".to_string());
        assert!(form.submit());
    }

    #[test]
    fn resubmit_restarts_the_acknowledgment() {
        let cancelled = CancelLog::default();
        let ack = TimerSlot::new();

        let mut form = filled();
        assert!(submit_and_acknowledge(&mut form, &ack, || FakeTimer::new(1, &cancelled)));
        assert!(ack.is_armed());

        let mut form = filled();
        assert!(submit_and_acknowledge(&mut form, &ack, || FakeTimer::new(2, &cancelled)));
        assert_eq!(*cancelled.borrow(), vec![1]);
    }

    #[test]
    fn rejected_submit_leaves_the_timer_alone() {
        let cancelled = CancelLog::default();
        let ack = TimerSlot::new();
        let mut form = ContactForm::default();
        assert!(!submit_and_acknowledge(&mut form, &ack, || FakeTimer::new(1, &cancelled)));
        assert!(!ack.is_armed());
        assert!(cancelled.borrow().is_empty());
    }

    #[test]
    fn unmount_cancels_a_pending_acknowledgment() {
        let cancelled = CancelLog::default();
        let ack = TimerSlot::new();
        let mut form = filled();
        submit_and_acknowledge(&mut form, &ack, || FakeTimer::new(1, &cancelled));

        // Effect cleanup, then the hook state itself going away.
        ack.cancel();
        drop(ack);
        assert_eq!(*cancelled.borrow(), vec![1]);
    }
}
