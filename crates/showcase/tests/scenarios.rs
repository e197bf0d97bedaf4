//! End-to-end scenarios driven through the controller
//!
//! Covers:
//! - Form submission (rejections, focus order, reset on success)
//! - Cosmetic timers (click/keypress resets, secret reveal, long press)
//! - Gallery auto-advance and accordion toggling

use pretty_assertions::assert_eq;
use showcase::display::StrengthMeter;
use showcase::validation::{Field, INVALID_EMAIL, NAME_REQUIRED};
use showcase::widgets::secret::LONG_PRESS_MESSAGE;
use showcase::{Showcase, ShowcaseConfig, SubmitOutcome, Target, UiEvent};
use std::time::Duration;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

fn page() -> Showcase {
    init_tracing();
    Showcase::new(&ShowcaseConfig::default()).expect("default config is valid")
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn fill(page: &mut Showcase, name: &str, email: &str, password: &str) {
    page.dispatch(UiEvent::input(Field::Name, name)).unwrap();
    page.dispatch(UiEvent::input(Field::Email, email)).unwrap();
    page.dispatch(UiEvent::input(Field::Password, password)).unwrap();
}

// ============================================================================
// Form
// ============================================================================

#[test]
fn empty_form_is_rejected_with_focus_on_name() {
    let mut page = page();
    assert_eq!(page.submit(), SubmitOutcome::Rejected { focus: Field::Name });

    let form = page.display().form;
    assert_eq!(form.name.error, NAME_REQUIRED);
    assert!(form.name.invalid);
    assert_eq!(form.email.error, "");
    assert!(!form.email.invalid);
    assert_eq!(form.focus, Some(Field::Name));
    assert!(form.shaking);
}

#[test]
fn email_without_domain_dot_is_rejected() {
    let mut page = page();
    fill(&mut page, "Ada", "ada@x", "abcdefgh");
    assert_eq!(page.submit(), SubmitOutcome::Rejected { focus: Field::Email });
    assert_eq!(page.display().form.email.error, INVALID_EMAIL);
}

#[test]
fn valid_form_is_accepted_and_reset() {
    let mut page = page();
    fill(&mut page, "Ada", "ada@example.com", "Abcdef12");

    let strength = page.display().form.strength;
    assert_eq!(strength.label, "Strong");
    assert_eq!(strength.percent, 75);

    assert_eq!(page.submit(), SubmitOutcome::Accepted);
    let form = page.display().form;
    assert_eq!(form.name.value, "");
    assert_eq!(form.email.value, "");
    assert_eq!(form.password.value, "");
    assert_eq!(form.strength, StrengthMeter::baseline());
    assert_eq!(form.notice.as_deref(), Some("Form submitted successfully!"));
    assert!(!form.shaking);
}

#[test]
fn short_strong_password_is_rejected() {
    let mut page = page();
    fill(&mut page, "Ada", "", "Abc12!x");

    assert_eq!(page.display().form.strength.label, "Strong");
    assert_eq!(
        page.submit(),
        SubmitOutcome::Rejected {
            focus: Field::Password
        }
    );
    // rejection is shown by focus and shake only
    assert_eq!(page.display().form.password.error, "");
}

#[test]
fn submit_event_matches_submit_call() {
    let mut page = page();
    page.dispatch(UiEvent::Submit).unwrap();
    assert_eq!(page.display().form.focus, Some(Field::Name));
}

#[test]
fn shake_clears_after_timeout() {
    let mut page = page();
    page.submit();
    page.advance(ms(499));
    assert!(page.display().form.shaking);
    page.advance(ms(1));
    assert!(!page.display().form.shaking);
}

#[test]
fn revalidation_is_idempotent() {
    let mut page = page();
    fill(&mut page, "", "nope", "abc");
    let first = page.display();
    fill(&mut page, "", "nope", "abc");
    assert_eq!(page.display(), first);
}

// ============================================================================
// Timers
// ============================================================================

#[test]
fn click_text_settles_after_last_click() {
    let mut page = page();
    page.dispatch(UiEvent::click(Target::ClickButton)).unwrap();
    page.advance(ms(1000));
    page.dispatch(UiEvent::click(Target::ClickButton)).unwrap();

    page.advance(ms(1000));
    assert_eq!(page.display().click.text, "Button was clicked!");
    page.advance(ms(500));
    assert_eq!(page.display().click.text, "Button clicked successfully!");
}

#[test]
fn keypress_panel_resets() {
    let mut page = page();
    page.dispatch(UiEvent::key("Enter", "Enter")).unwrap();
    let panel = page.display().keypress;
    assert_eq!(panel.text, "You pressed: Enter (Key code: Enter)");
    assert!(panel.highlighted);

    page.advance(ms(2000));
    let panel = page.display().keypress;
    assert_eq!(panel.text, "Press another key...");
    assert!(!panel.highlighted);
}

#[test]
fn double_click_reveals_then_hides() {
    let mut page = page();
    page.dispatch(UiEvent::DoubleClick {
        target: Target::SecretTrigger,
    })
    .unwrap();
    assert!(page.display().secret.visible);
    page.advance(ms(2999));
    assert!(page.display().secret.visible);
    page.advance(ms(1));
    assert!(!page.display().secret.visible);
}

#[test]
fn secret_hide_measured_from_last_reveal() {
    let mut page = page();
    let double_click = UiEvent::DoubleClick {
        target: Target::SecretTrigger,
    };
    page.dispatch(double_click.clone()).unwrap();
    page.advance(ms(2000));
    page.dispatch(double_click).unwrap();

    // the first reveal's hide would have landed at 3000
    page.advance(ms(1000));
    assert!(page.display().secret.visible);
    page.advance(ms(1999));
    assert!(page.display().secret.visible);
    page.advance(ms(1));
    assert!(!page.display().secret.visible);
    assert_eq!(page.pending_timers(), 1);
}

#[test]
fn gallery_keeps_pace_over_a_long_idle() {
    let mut page = page();
    page.dispatch(UiEvent::click(Target::ClickButton)).unwrap();
    page.advance(ms(86_400_000 + 1500));

    let display = page.display();
    assert_eq!(display.click.text, "Button clicked successfully!");
    assert_eq!(display.gallery.active, ((86_401_500 / 3000) % 3) as usize);
}

#[test]
fn long_press_reveals_after_threshold() {
    let mut page = page();
    page.dispatch(UiEvent::PointerDown {
        target: Target::SecretTrigger,
    })
    .unwrap();
    page.advance(ms(999));
    assert!(!page.display().secret.visible);

    page.advance(ms(1));
    let secret = page.display().secret;
    assert!(secret.visible);
    assert_eq!(secret.message, LONG_PRESS_MESSAGE);

    // hide is measured from the reveal, not from the press
    page.advance(ms(2999));
    assert!(page.display().secret.visible);
    page.advance(ms(1));
    assert!(!page.display().secret.visible);
}

#[test]
fn long_press_reveal_inside_one_large_advance() {
    let mut page = page();
    page.dispatch(UiEvent::PointerDown {
        target: Target::SecretTrigger,
    })
    .unwrap();
    page.advance(ms(3500));
    assert!(page.display().secret.visible);
    page.advance(ms(500));
    assert!(!page.display().secret.visible);
}

#[test]
fn released_or_left_press_never_reveals() {
    for release in [
        UiEvent::PointerUp {
            target: Target::SecretTrigger,
        },
        UiEvent::PointerLeave {
            target: Target::SecretTrigger,
        },
    ] {
        let mut page = page();
        page.dispatch(UiEvent::PointerDown {
            target: Target::SecretTrigger,
        })
        .unwrap();
        page.advance(ms(900));
        page.dispatch(release).unwrap();
        page.advance(ms(5000));
        assert!(!page.display().secret.visible);
    }
}

// ============================================================================
// Gallery & accordion
// ============================================================================

#[test]
fn gallery_advances_once_per_interval() {
    let mut page = page();
    page.advance(ms(2999));
    assert_eq!(page.display().gallery.active, 0);
    page.advance(ms(1));
    assert_eq!(page.display().gallery.active, 1);
    page.advance(ms(6000));
    assert_eq!(page.display().gallery.active, 0);
}

#[test]
fn manual_navigation_does_not_reset_interval() {
    let mut page = page();
    page.advance(ms(2000));
    page.dispatch(UiEvent::click(Target::GalleryPrev)).unwrap();
    assert_eq!(page.display().gallery.active, 2);
    page.advance(ms(1000));
    assert_eq!(page.display().gallery.active, 0);
}

#[test]
fn accordion_toggles_one_section() {
    let mut page = page();
    page.dispatch(UiEvent::click(Target::AccordionHeader(1))).unwrap();
    assert_eq!(page.display().accordion.open(), Some(1));
    page.dispatch(UiEvent::click(Target::AccordionHeader(0))).unwrap();
    assert_eq!(page.display().accordion.open(), Some(0));
    page.dispatch(UiEvent::click(Target::AccordionHeader(0))).unwrap();
    assert_eq!(page.display().accordion.open(), None);
}

#[test]
fn color_button_cycles() {
    let mut page = page();
    for _ in 0..5 {
        page.dispatch(UiEvent::click(Target::ColorButton)).unwrap();
    }
    let color = page.display().color;
    assert_eq!(color.background.as_deref(), Some("#e74c3c"));
    assert_eq!(color.label, "Color Changed (1/5)");
}

#[test]
fn display_state_serializes() {
    let page = page();
    let json = serde_json::to_value(page.display()).unwrap();
    assert_eq!(json["form"]["strength"]["label"], "Password strength");
    assert_eq!(json["gallery"]["active"], 0);
}
