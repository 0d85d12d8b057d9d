use folio_core::config::SnapSettings;
use folio_core::contact::{ContactDraft, ContactError, ContactField, SubmitPhase};
use folio_core::content::{
    nav_link_by_target, radar_label_position, EXPERIENCES, NAV_LINKS, PROFILE, SECTION_IDS,
};
use folio_core::motion::{snap_duration_secs, SnapMotion};
use folio_core::typing::{TypingCycle, DELETE_DELAY_MS, HOLD_DELAY_MS, TYPE_DELAY_MS};
use folio_core::viewport::{is_scrolled, max_scroll, reveal_reached, scroll_percent, Layout};

fn assert_close(actual: f64, expected: f64) {
    let delta = (actual - expected).abs();
    assert!(
        delta <= 1e-9,
        "expected {:.9} got {:.9} (delta {:.9})",
        expected,
        actual,
        delta
    );
}

#[test]
fn typing_cycles_through_phrases() {
    let mut cycle = TypingCycle::new(&["ab", "c"]).expect("phrases");
    assert_eq!(cycle.text(), "");
    assert_eq!(cycle.tick(), TYPE_DELAY_MS);
    assert_eq!(cycle.text(), "a");
    assert_eq!(cycle.tick(), HOLD_DELAY_MS);
    assert_eq!(cycle.text(), "ab");
    assert!(cycle.is_deleting());
    assert_eq!(cycle.tick(), DELETE_DELAY_MS);
    assert_eq!(cycle.text(), "a");
    assert_eq!(cycle.tick(), DELETE_DELAY_MS);
    assert_eq!(cycle.text(), "");
    assert_eq!(cycle.tick(), TYPE_DELAY_MS);
    assert_eq!(cycle.index(), 1);
    assert!(!cycle.is_deleting());
    cycle.tick();
    assert_eq!(cycle.text(), "c");
    for _ in 0..3 {
        cycle.tick();
    }
    assert_eq!(cycle.index(), 0);
}

#[test]
fn typing_respects_char_boundaries() {
    let mut cycle = TypingCycle::new(&["né"]).expect("phrases");
    cycle.tick();
    cycle.tick();
    assert_eq!(cycle.text(), "né");
}

#[test]
fn typing_needs_a_phrase() {
    assert!(TypingCycle::new(&[]).is_none());
}

#[test]
fn snap_motion_eases_to_target() {
    let settings = SnapSettings::default();
    let motion = SnapMotion::new(1000.0, 1500.0, 0.0, 1000.0, &settings).expect("motion");
    assert_close(motion.duration_ms(), 250.0);
    assert_close(motion.position_at(0.0), 1000.0);
    assert!(motion.position_at(125.0) > 1250.0);
    assert_close(motion.position_at(250.0), 1500.0);
    assert!(motion.is_finished(251.0));
    assert!(!motion.is_finished(240.0));
    assert_eq!(motion.target(), 1500.0);
}

#[test]
fn tiny_snap_is_skipped() {
    let settings = SnapSettings::default();
    assert!(SnapMotion::new(1000.0, 1000.2, 0.0, 900.0, &settings).is_none());
}

#[test]
fn snap_duration_stays_in_range() {
    let settings = SnapSettings::default();
    assert_close(snap_duration_secs(0.0, 800.0, &settings), 0.15);
    assert_close(snap_duration_secs(10_000.0, 800.0, &settings), 0.35);
    assert_close(snap_duration_secs(100.0, 0.0, &settings), 0.35);
}

#[test]
fn layout_switches_at_breakpoint() {
    assert_eq!(Layout::from_width(767.0, 768), Layout::Mobile);
    assert_eq!(Layout::from_width(768.0, 768), Layout::Desktop);
    assert!(Layout::Desktop.is_desktop());
}

#[test]
fn navigation_metrics() {
    assert!(!is_scrolled(50.0, 50.0));
    assert!(is_scrolled(51.0, 50.0));
    assert_close(scroll_percent(500.0, 2000.0, 1000.0), 50.0);
    assert_eq!(scroll_percent(500.0, 800.0, 1000.0), 0.0);
    assert_eq!(max_scroll(800.0, 1000.0), 0.0);
    assert!(reveal_reached(800.0, 1000.0, 0.85));
    assert!(!reveal_reached(900.0, 1000.0, 0.85));
}

#[test]
fn contact_requires_every_field() {
    let mut draft = ContactDraft::default();
    assert_eq!(draft.missing(), ContactField::ALL.to_vec());
    draft.set(ContactField::Name, "Ada".to_string());
    draft.set(ContactField::Email, "   ".to_string());
    assert_eq!(
        draft.validate(),
        Err(ContactError::MissingField(ContactField::Email))
    );
}

#[test]
fn contact_submission_is_stubbed() {
    let mut draft = ContactDraft {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        message: "Hello".to_string(),
    };
    let mut phase = SubmitPhase::default();
    assert_eq!(phase.begin(&draft), Ok(1500));
    assert_eq!(phase, SubmitPhase::Submitting);
    assert_eq!(phase.begin(&draft), Err(ContactError::Busy));
    assert_eq!(phase.finish(&mut draft), Some(3000));
    assert_eq!(draft, ContactDraft::default());
    assert_eq!(phase.button_label(), "Message Sent!");
    phase.dismiss();
    assert_eq!(phase, SubmitPhase::Idle);
    assert_eq!(phase.finish(&mut draft), None);
}

#[test]
fn generated_content_is_consistent() {
    assert!(!PROFILE.name.is_empty());
    assert!(!PROFILE.roles.is_empty());
    assert!(!EXPERIENCES.is_empty());
    for link in NAV_LINKS {
        assert_eq!(nav_link_by_target(&link.href()), Some(link));
        assert!(SECTION_IDS.contains(&link.target));
    }
}

#[test]
fn radar_labels_start_at_top() {
    let (x, y) = radar_label_position(0, 6, 48.0);
    assert_close(x, 50.0);
    assert_close(y, 2.0);
    let (x, y) = radar_label_position(3, 6, 48.0);
    assert_close(x, 50.0);
    assert_close(y, 98.0);
}
