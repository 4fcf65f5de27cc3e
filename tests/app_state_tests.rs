//! Tests for Application State Management
//!
//! Drives `AppState` through its keyboard handler, the same entry point the
//! terminal event loop uses, so the whole questionnaire can be exercised
//! without a TTY.
//!
//! These tests verify:
//! - Intro, question, and result key bindings
//! - Per-step control behavior (age buffer, choice lists, sliders, sub-questions)
//! - The full quick-mode walkthrough down to the predicted type
//! - Error surfacing on the status line vs. fatal propagation

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use personatui::app::{AppState, StatusKind};
use personatui::classifier::FixedClassifier;
use personatui::error::PersonaError;
use personatui::labels::{Gender, Interest, PersonalityType};
use personatui::mapping_file::Descriptions;
use personatui::predictor::{build_feature_vector, Predictor};
use personatui::session::{QuestionnaireMode, SubQuestion, TraitKind};
use personatui::theme::UiText;
use personatui::wizard::{WizardPhase, WizardStep};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Press a key and return whether the app asked to exit
fn press(state: &mut AppState, code: KeyCode) -> bool {
    state.handle_key_event(key(code)).expect("key handled")
}

fn quick_state() -> AppState {
    AppState::new(
        QuestionnaireMode::Quick,
        Predictor::with_rules(),
        Descriptions::builtin(),
    )
}

fn detailed_state() -> AppState {
    AppState::new(
        QuestionnaireMode::Detailed,
        Predictor::with_rules(),
        Descriptions::builtin(),
    )
}

/// Move from the intro screen to the given step by pressing Enter
fn start_and_advance_to(state: &mut AppState, step: WizardStep) {
    press(state, KeyCode::Enter);
    while state.wizard.current_step() != Some(step) {
        press(state, KeyCode::Enter);
    }
}

// =============================================================================
// Exit and Intro Keys
// =============================================================================

#[test]
fn test_q_on_intro_exits() {
    let mut state = quick_state();
    assert!(press(&mut state, KeyCode::Char('q')));
}

#[test]
fn test_esc_on_intro_exits() {
    let mut state = quick_state();
    assert!(press(&mut state, KeyCode::Esc));
}

#[test]
fn test_ctrl_c_exits_everywhere() {
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

    let mut state = quick_state();
    assert!(state.handle_key_event(ctrl_c).expect("key handled"));

    let mut state = quick_state();
    press(&mut state, KeyCode::Enter);
    assert!(state.handle_key_event(ctrl_c).expect("key handled"));
}

#[test]
fn test_enter_starts_the_questionnaire() {
    let mut state = quick_state();
    assert!(!press(&mut state, KeyCode::Enter));
    assert_eq!(
        state.wizard.phase(),
        WizardPhase::Collecting(WizardStep::Age)
    );
    // The age buffer shows the default answer
    assert_eq!(state.age_input, "18");
}

#[test]
fn test_space_also_starts_the_questionnaire() {
    let mut state = quick_state();
    press(&mut state, KeyCode::Char(' '));
    assert_eq!(state.wizard.current_step(), Some(WizardStep::Age));
}

#[test]
fn test_unbound_intro_keys_are_ignored() {
    let mut state = quick_state();
    assert!(!press(&mut state, KeyCode::Char('x')));
    assert_eq!(state.wizard.phase(), WizardPhase::Intro);
}

// =============================================================================
// Question Navigation Keys
// =============================================================================

#[test]
fn test_enter_advances_between_steps() {
    let mut state = quick_state();
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.wizard.current_step(), Some(WizardStep::Gender));
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.wizard.current_step(), Some(WizardStep::Education));
}

#[test]
fn test_esc_and_p_retreat() {
    let mut state = quick_state();
    start_and_advance_to(&mut state, WizardStep::Education);

    press(&mut state, KeyCode::Esc);
    assert_eq!(state.wizard.current_step(), Some(WizardStep::Gender));
    press(&mut state, KeyCode::Char('p'));
    assert_eq!(state.wizard.current_step(), Some(WizardStep::Age));
}

#[test]
fn test_retreat_on_first_step_stays_put() {
    let mut state = quick_state();
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Esc);
    assert_eq!(state.wizard.current_step(), Some(WizardStep::Age));
}

#[test]
fn test_q_quits_from_a_question() {
    let mut state = quick_state();
    press(&mut state, KeyCode::Enter);
    assert!(press(&mut state, KeyCode::Char('q')));
}

#[test]
fn test_controls_resync_when_stepping_back() {
    let mut state = quick_state();
    press(&mut state, KeyCode::Enter);

    // Age 18 -> 21 via the step keys
    for _ in 0..3 {
        press(&mut state, KeyCode::Up);
    }
    assert_eq!(state.wizard.session().age, 21);

    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Esc);
    assert_eq!(state.age_input, "21");
}

// =============================================================================
// Age Step
// =============================================================================

#[test]
fn test_typing_a_valid_age_records_it() {
    let mut state = quick_state();
    press(&mut state, KeyCode::Enter);

    // Clear the prefilled "18", then type "21"
    press(&mut state, KeyCode::Backspace);
    press(&mut state, KeyCode::Backspace);
    press(&mut state, KeyCode::Char('2'));
    press(&mut state, KeyCode::Char('1'));

    assert_eq!(state.age_input, "21");
    assert_eq!(state.wizard.session().age, 21);
    assert!(state.status.is_none());
}

#[test]
fn test_out_of_range_age_sets_error_status() {
    let mut state = quick_state();
    press(&mut state, KeyCode::Enter);

    press(&mut state, KeyCode::Backspace);
    press(&mut state, KeyCode::Backspace);
    press(&mut state, KeyCode::Char('9'));
    press(&mut state, KeyCode::Char('9'));

    let status = state.status.as_ref().expect("status set");
    assert_eq!(status.kind, StatusKind::Error);
    assert!(status.text.contains("18"));
    assert!(status.text.contains("57"));
    // The last valid answer is still in the session
    assert_eq!(state.wizard.session().age, 18);
}

#[test]
fn test_emptying_the_age_buffer_clears_the_status() {
    let mut state = quick_state();
    press(&mut state, KeyCode::Enter);

    press(&mut state, KeyCode::Backspace);
    press(&mut state, KeyCode::Backspace);
    press(&mut state, KeyCode::Char('9'));
    assert!(state.status.is_some());

    press(&mut state, KeyCode::Backspace);
    assert!(state.status.is_none());
    assert_eq!(state.age_input, "");
}

#[test]
fn test_age_buffer_is_capped_at_two_digits() {
    let mut state = quick_state();
    press(&mut state, KeyCode::Enter);

    // Buffer already holds "18"; further digits are dropped
    press(&mut state, KeyCode::Char('5'));
    assert_eq!(state.age_input, "18");
}

#[test]
fn test_age_step_keys_clamp_to_range() {
    let mut state = quick_state();
    press(&mut state, KeyCode::Enter);

    // Already at the minimum
    press(&mut state, KeyCode::Down);
    assert_eq!(state.wizard.session().age, 18);

    for _ in 0..60 {
        press(&mut state, KeyCode::Char('k'));
    }
    assert_eq!(state.wizard.session().age, 57);
    assert_eq!(state.age_input, "57");

    press(&mut state, KeyCode::Char('j'));
    assert_eq!(state.wizard.session().age, 56);
}

#[test]
fn test_letters_on_age_step_are_ignored() {
    let mut state = quick_state();
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Char('x'));
    assert_eq!(state.age_input, "18");
    assert_eq!(state.wizard.session().age, 18);
}

// =============================================================================
// Choice Steps
// =============================================================================

#[test]
fn test_choice_highlight_follows_arrows_and_records() {
    let mut state = quick_state();
    start_and_advance_to(&mut state, WizardStep::Gender);
    assert_eq!(state.choice_index, 0);
    assert_eq!(state.wizard.session().gender, Gender::Male);

    press(&mut state, KeyCode::Down);
    assert_eq!(state.choice_index, 1);
    assert_eq!(state.wizard.session().gender, Gender::Female);

    press(&mut state, KeyCode::Up);
    assert_eq!(state.wizard.session().gender, Gender::Male);
}

#[test]
fn test_choice_highlight_clamps_at_the_ends() {
    let mut state = quick_state();
    start_and_advance_to(&mut state, WizardStep::Gender);

    press(&mut state, KeyCode::Up);
    assert_eq!(state.choice_index, 0);

    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Down);
    assert_eq!(state.choice_index, 1, "only two gender rows");
}

#[test]
fn test_interest_rows_follow_display_order() {
    let mut state = quick_state();
    start_and_advance_to(&mut state, WizardStep::Interest);

    // Display order: Arts, Sports, Technology, Others, Unknown
    press(&mut state, KeyCode::Char('j'));
    assert_eq!(state.wizard.session().interest, Interest::Sports);
    press(&mut state, KeyCode::Char('j'));
    assert_eq!(state.wizard.session().interest, Interest::Technology);
}

#[test]
fn test_choice_count_per_step() {
    assert_eq!(AppState::choice_count(WizardStep::Gender), 2);
    assert_eq!(AppState::choice_count(WizardStep::Education), 2);
    assert_eq!(AppState::choice_count(WizardStep::Interest), 5);
    assert_eq!(AppState::choice_count(WizardStep::Age), 0);
}

// =============================================================================
// Quick-Mode Sliders
// =============================================================================

#[test]
fn test_slider_moves_in_tenths() {
    let mut state = quick_state();
    start_and_advance_to(&mut state, WizardStep::Introversion);

    press(&mut state, KeyCode::Right);
    assert_eq!(
        state.wizard.session().axis_value(TraitKind::Introversion),
        Some(5.1)
    );
    press(&mut state, KeyCode::Char('h'));
    press(&mut state, KeyCode::Char('h'));
    assert_eq!(
        state.wizard.session().axis_value(TraitKind::Introversion),
        Some(4.9)
    );
}

#[test]
fn test_slider_clamps_at_scale_ends() {
    let mut state = quick_state();
    start_and_advance_to(&mut state, WizardStep::Introversion);

    for _ in 0..60 {
        press(&mut state, KeyCode::Right);
    }
    assert_eq!(
        state.wizard.session().axis_value(TraitKind::Introversion),
        Some(10.0)
    );

    for _ in 0..120 {
        press(&mut state, KeyCode::Left);
    }
    assert_eq!(
        state.wizard.session().axis_value(TraitKind::Introversion),
        Some(0.0)
    );
}

#[test]
fn test_sub_question_keys_do_nothing_in_quick_mode() {
    let mut state = quick_state();
    start_and_advance_to(&mut state, WizardStep::Introversion);

    // j/k are sub-question focus keys only in detailed mode
    press(&mut state, KeyCode::Char('j'));
    press(&mut state, KeyCode::Char('k'));
    assert_eq!(
        state.wizard.session().axis_value(TraitKind::Introversion),
        Some(5.0)
    );
}

// =============================================================================
// Detailed-Mode Sub-Questions
// =============================================================================

#[test]
fn test_sub_answers_start_from_the_middle() {
    let mut state = detailed_state();
    start_and_advance_to(&mut state, WizardStep::Introversion);
    assert_eq!(state.focused_sub, SubQuestion::First);

    press(&mut state, KeyCode::Right);
    let axis = state.wizard.session().axis(TraitKind::Introversion);
    assert_eq!(axis.sub(SubQuestion::First), Some(0.55));
}

#[test]
fn test_sub_focus_moves_with_j_and_k() {
    let mut state = detailed_state();
    start_and_advance_to(&mut state, WizardStep::Introversion);

    press(&mut state, KeyCode::Char('j'));
    assert_eq!(state.focused_sub, SubQuestion::Second);
    press(&mut state, KeyCode::Char('j'));
    press(&mut state, KeyCode::Char('j'));
    assert_eq!(state.focused_sub, SubQuestion::Third, "focus clamps at the last row");
    press(&mut state, KeyCode::Char('k'));
    assert_eq!(state.focused_sub, SubQuestion::Second);
}

#[test]
fn test_step_completes_once_all_subs_are_answered() {
    let mut state = detailed_state();
    start_and_advance_to(&mut state, WizardStep::Introversion);

    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Char('j'));
    press(&mut state, KeyCode::Left);
    assert!(!state.wizard.is_step_recorded(WizardStep::Introversion));

    press(&mut state, KeyCode::Char('j'));
    press(&mut state, KeyCode::Right);
    assert!(state.wizard.is_step_recorded(WizardStep::Introversion));

    // (0.55 + 0.45 + 0.55) * 3.3
    let value = state
        .wizard
        .session()
        .axis_value(TraitKind::Introversion)
        .expect("composite determined");
    assert!((value - 5.115).abs() < 1e-9);
}

#[test]
fn test_backspace_clears_the_focused_sub_answer() {
    let mut state = detailed_state();
    start_and_advance_to(&mut state, WizardStep::Introversion);

    for _ in 0..3 {
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Char('j'));
    }
    assert!(state.wizard.is_step_recorded(WizardStep::Introversion));

    press(&mut state, KeyCode::Backspace);
    assert!(!state.wizard.is_step_recorded(WizardStep::Introversion));
    assert_eq!(
        state.wizard.session().axis_value(TraitKind::Introversion),
        None
    );
}

#[test]
fn test_predict_with_unanswered_traits_reports_on_status_line() {
    let mut state = detailed_state();
    start_and_advance_to(&mut state, WizardStep::Interest);
    assert!(state.wizard.can_predict());

    assert!(!press(&mut state, KeyCode::Enter));

    // Still collecting, with the incomplete-questionnaire message showing
    assert_eq!(
        state.wizard.phase(),
        WizardPhase::Collecting(WizardStep::Interest)
    );
    let status = state.status.as_ref().expect("status set");
    assert_eq!(status.kind, StatusKind::Error);
    assert_eq!(status.text, UiText::INCOMPLETE);
}

#[test]
fn test_detailed_walkthrough_reaches_a_prediction() {
    let mut state = detailed_state();
    press(&mut state, KeyCode::Enter);

    // Accept age, gender, and education defaults
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Enter);

    // Nudge every sub-answer of all four trait steps above the middle
    for _ in 0..4 {
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Char('j'));
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Char('j'));
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Enter);
    }
    assert_eq!(state.wizard.current_step(), Some(WizardStep::Interest));
    assert!(state.wizard.is_complete());

    press(&mut state, KeyCode::Enter);
    assert_eq!(state.wizard.phase(), WizardPhase::Result);

    // Every composite is (0.55 * 3) * 3.3 = 5.445, above the midline
    assert_eq!(
        state.wizard.session().prediction,
        Some(PersonalityType::Estj)
    );
}

// =============================================================================
// Full Quick-Mode Walkthrough
// =============================================================================

#[test]
fn test_quick_walkthrough_produces_the_expected_vector_and_type() {
    let mut state = quick_state();
    press(&mut state, KeyCode::Enter);

    // Age: 21
    press(&mut state, KeyCode::Backspace);
    press(&mut state, KeyCode::Backspace);
    press(&mut state, KeyCode::Char('2'));
    press(&mut state, KeyCode::Char('1'));

    // Gender: keep Male; Education: keep Undergraduate
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Enter);

    // Social energy 6.6, perception 3.3, decisions 9.9, lifestyle 0.0
    press(&mut state, KeyCode::Enter);
    for _ in 0..16 {
        press(&mut state, KeyCode::Right);
    }
    press(&mut state, KeyCode::Enter);
    for _ in 0..17 {
        press(&mut state, KeyCode::Left);
    }
    press(&mut state, KeyCode::Enter);
    for _ in 0..49 {
        press(&mut state, KeyCode::Right);
    }
    press(&mut state, KeyCode::Enter);
    for _ in 0..60 {
        press(&mut state, KeyCode::Left);
    }

    // Interest: Sports
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Down);

    let vector = build_feature_vector(state.wizard.session()).expect("complete");
    assert_eq!(vector.values(), &[21.0, 1.0, 0.0, 6.6, 3.3, 9.9, 0.0, 2.0]);

    assert!(state.wizard.can_predict());
    press(&mut state, KeyCode::Enter);

    assert_eq!(state.wizard.phase(), WizardPhase::Result);
    assert_eq!(
        state.wizard.session().prediction,
        Some(PersonalityType::Entp)
    );
    assert!(state.status.is_none());
}

// =============================================================================
// Result Screen and Restart
// =============================================================================

/// Drive a quick-mode run straight to the result screen
fn finished_state(classifier_code: i64) -> AppState {
    let mut state = AppState::new(
        QuestionnaireMode::Quick,
        Predictor::new(Box::new(FixedClassifier::new(classifier_code))),
        Descriptions::builtin(),
    );
    press(&mut state, KeyCode::Enter);
    for _ in 0..8 {
        press(&mut state, KeyCode::Enter);
    }
    state
}

#[test]
fn test_result_screen_shows_the_predicted_type() {
    let state = finished_state(9);
    assert_eq!(state.wizard.phase(), WizardPhase::Result);
    assert_eq!(
        state.wizard.session().prediction,
        Some(PersonalityType::Infp)
    );
    let text = state.descriptions.describe(PersonalityType::Infp);
    assert!(text.contains("Mediator"));
}

#[test]
fn test_r_restarts_from_the_intro() {
    let mut state = finished_state(0);
    press(&mut state, KeyCode::Char('r'));

    assert_eq!(state.wizard.phase(), WizardPhase::Intro);
    assert_eq!(state.age_input, "");
    assert!(state.status.is_none());
    assert!(state.wizard.session().prediction.is_none());

    // A fresh run starts at the age step with default answers again
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.wizard.current_step(), Some(WizardStep::Age));
    assert_eq!(state.age_input, "18");
}

#[test]
fn test_q_and_esc_exit_from_the_result() {
    let mut state = finished_state(0);
    assert!(press(&mut state, KeyCode::Char('q')));

    let mut state = finished_state(0);
    assert!(press(&mut state, KeyCode::Esc));
}

#[test]
fn test_unknown_label_code_is_fatal() {
    let mut state = AppState::new(
        QuestionnaireMode::Quick,
        Predictor::new(Box::new(FixedClassifier::new(99))),
        Descriptions::builtin(),
    );
    press(&mut state, KeyCode::Enter);
    for _ in 0..7 {
        press(&mut state, KeyCode::Enter);
    }
    assert!(state.wizard.can_predict());

    let err = state
        .handle_key_event(key(KeyCode::Enter))
        .expect_err("mapping mismatch must propagate");
    assert!(matches!(err, PersonaError::UnknownLabel { code: 99 }));
}
