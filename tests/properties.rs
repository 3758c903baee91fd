// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Property tests for the guard and quantization rules.

use proptest::prelude::*;
use speaker_lib::{Radio, Speaker, SpeakerDevice, Status, Television};

fn powered_speaker() -> SpeakerDevice {
    let mut speaker = SpeakerDevice::new("Prop");
    speaker.turn_on();
    speaker
}

proptest! {
    #[test]
    fn accepted_volume_is_half_step_quantized(v in 0.0f64..=10.0) {
        let mut speaker = powered_speaker();
        prop_assert!(speaker.set_volume(v).is_success());

        let volume = speaker.volume().value();
        prop_assert_eq!((volume * 2.0).fract(), 0.0);
        prop_assert!((volume - v).abs() <= 0.25);
    }

    #[test]
    fn volume_outside_fixed_range_is_refused(v in prop_oneof![-1.0e6f64..-0.001, 10.001f64..1.0e6]) {
        let mut speaker = powered_speaker();
        let before = speaker.volume();
        prop_assert_eq!(speaker.set_volume(v).status(), Status::NotAllowed);
        prop_assert_eq!(speaker.volume(), before);
    }

    #[test]
    fn volume_never_changes_while_off(v in any::<f64>()) {
        let mut speaker = SpeakerDevice::new("Prop");
        let before = speaker.volume();
        prop_assert_eq!(speaker.set_volume(v).status(), Status::DeviceOff);
        prop_assert_eq!(speaker.volume(), before);
    }

    #[test]
    fn in_band_frequency_is_rounded_to_tenth(f in 87.5f64..=108.0) {
        let mut radio = Radio::new("Prop");
        radio.turn_on();
        prop_assert!(radio.set_frequency(f).is_success());

        let tuned = radio.frequency().value();
        let tenths = (tuned * 10.0).round();
        prop_assert_eq!(tuned, tenths / 10.0);
        prop_assert!((tuned - f).abs() <= 0.05 + 1e-9);
    }

    #[test]
    fn tuning_matches_decimal_rounding(tenths in 875i64..1080, hundredth in 0i64..10) {
        // Input written as a two-decimal literal, e.g. 88.45.
        let input: f64 = format!("{}.{}{}", tenths / 10, tenths % 10, hundredth).parse().unwrap();
        let mut radio = Radio::new("Prop");
        radio.turn_on();
        prop_assert!(radio.set_frequency(input).is_success());

        let below = tenths as f64 / 10.0;
        let above = (tenths + 1) as f64 / 10.0;
        let expected = match hundredth {
            0..=4 => below,
            6..=9 => above,
            // Compare the exact expansion of the stored double with x.x5.
            _ => {
                let exact = format!("{input:.40}");
                let midpoint = format!("{}.{}5{}", tenths / 10, tenths % 10, "0".repeat(38));
                match exact.cmp(&midpoint) {
                    std::cmp::Ordering::Less => below,
                    std::cmp::Ordering::Greater => above,
                    std::cmp::Ordering::Equal if tenths % 2 == 0 => below,
                    std::cmp::Ordering::Equal => above,
                }
            }
        };
        prop_assert_eq!(radio.frequency().value(), expected);
    }

    #[test]
    fn out_of_band_frequency_keeps_tuning(f in prop_oneof![0.0f64..87.49, 108.01f64..500.0]) {
        let mut radio = Radio::new("Prop");
        radio.turn_on();
        let before = radio.frequency();
        prop_assert_eq!(radio.set_frequency(f).status(), Status::NotAllowed);
        prop_assert_eq!(radio.frequency(), before);
    }

    #[test]
    fn channel_switch_succeeds_iff_strictly_inside_and_new(c in -10i32..120, powered in any::<bool>()) {
        let mut tv = Television::new("Prop", 40.0).unwrap();
        if powered {
            tv.turn_on();
        }
        let before = tv.channel();
        let expected = powered && 1 < c && c < 100 && c != before;

        let outcome = tv.switch_channel(c);
        prop_assert_eq!(outcome.is_success(), expected);
        prop_assert_eq!(tv.channel(), if expected { c } else { before });
    }

    #[test]
    fn unknown_input_source_never_switches(source in "[a-z]{1,8}") {
        let mut tv = Television::new("Prop", 40.0).unwrap();
        tv.turn_on();
        let outcome = tv.switch_input_source(&source);
        prop_assert_eq!(outcome.status(), Status::NotAllowed);
        prop_assert!(outcome.message().ends_with("HDMI, AV, SCART."));
        prop_assert_eq!(tv.input_source(), "HDMI");
    }
}
