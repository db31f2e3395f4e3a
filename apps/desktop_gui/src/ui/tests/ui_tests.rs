use console_core::{Action, LoginForm};

use crate::controller::events::UiIntent;
use crate::ui::{
    charts::{nearest_index, ValueRange},
    panels::LoginFields,
    theme::{palette, scaled_text_styles, visuals_for},
    widgets::initials,
};

#[test]
fn value_range_spans_all_values() {
    let range = ValueRange::around([101.2, 98.5, 106.1]).expect("range");
    assert_eq!(range.min, 98.5);
    assert_eq!(range.max, 106.1);
    assert!(ValueRange::around(std::iter::empty::<f64>()).is_none());
}

#[test]
fn bar_range_always_contains_zero() {
    let gains = ValueRange::around([2.0, 15.0]).expect("range").including_zero();
    assert_eq!(gains.min, 0.0);
    let losses = ValueRange::around([-9.5, -1.5]).expect("range").including_zero();
    assert_eq!(losses.max, 0.0);
    assert_eq!(losses.min, -9.5);
}

#[test]
fn padded_and_rounded_range_lands_on_whole_numbers() {
    let range = ValueRange { min: 98.5, max: 106.1 }.padded(0.1).rounded_out();
    assert_eq!(range.min, 97.0);
    assert_eq!(range.max, 107.0);
}

#[test]
fn fraction_is_clamped_to_the_unit_interval() {
    let range = ValueRange { min: -10.0, max: 30.0 };
    assert_eq!(range.fraction(-10.0), 0.0);
    assert_eq!(range.fraction(10.0), 0.5);
    assert_eq!(range.fraction(30.0), 1.0);
    assert_eq!(range.fraction(90.0), 1.0);
    assert_eq!(range.fraction(-90.0), 0.0);
}

#[test]
fn degenerate_range_does_not_divide_by_zero() {
    let flat = ValueRange { min: 5.0, max: 5.0 };
    assert!(flat.fraction(5.0).is_finite());
}

#[test]
fn ticks_include_both_ends() {
    let ticks = ValueRange { min: 0.0, max: 20.0 }.ticks(4);
    assert_eq!(ticks, vec![0.0, 5.0, 10.0, 15.0, 20.0]);
    assert_eq!(ValueRange { min: 0.0, max: 1.0 }.ticks(0).len(), 2);
}

#[test]
fn nearest_index_picks_closest_column() {
    let xs = [0.0, 50.0, 100.0, 150.0];
    assert_eq!(nearest_index(&xs, 60.0), Some(1));
    assert_eq!(nearest_index(&xs, 140.0), Some(3));
    assert_eq!(nearest_index(&xs, -30.0), Some(0));
    assert_eq!(nearest_index(&[], 10.0), None);
}

#[test]
fn initials_skip_punctuation() {
    assert_eq!(initials("A. Corbin"), "AC");
    assert_eq!(initials("jordan lee smith"), "JL");
    assert_eq!(initials("  "), "");
}

#[test]
fn palettes_differ_between_modes() {
    assert_ne!(palette(true).app_background, palette(false).app_background);
    assert!(visuals_for(true).dark_mode);
    assert!(!visuals_for(false).dark_mode);
}

#[test]
fn text_scale_multiplies_every_style() {
    let base = scaled_text_styles(1.0);
    let large = scaled_text_styles(1.25);
    for (style, font) in &base {
        let scaled = &large[style];
        assert!((scaled.size - font.size * 1.25).abs() < 1e-4);
    }
}

#[test]
fn login_submit_trims_email_and_keeps_password() {
    let mut fields = LoginFields::prefilled("a.corbin@wealth.co");
    fields.email = "  someone@example.com ".to_string();
    assert_eq!(
        fields.submit(),
        UiIntent::Console(Action::Login(LoginForm::new(
            "someone@example.com",
            "password"
        )))
    );
}
