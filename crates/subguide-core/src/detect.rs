//! User-agent based platform detection.
//!
//! The heuristic is first-match-wins over the lower-cased user agent. Android
//! TV has no reliable marker, so a wide Android viewport is also treated as a
//! TV; a desktop-mode Android browser on a large screen is misclassified by
//! this rule and that is accepted.

use crate::platform::Platform;

/// Viewport width above which an Android user agent is treated as a TV.
pub const ANDROID_TV_MIN_WIDTH: u32 = 1000;

/// Environment signals read from the browser at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Environment {
    /// Raw `navigator.userAgent`; case does not matter.
    pub user_agent: String,
    /// `window.innerWidth` in CSS pixels.
    pub viewport_width: u32,
}

impl Environment {
    /// Build an environment snapshot.
    #[must_use]
    pub fn new(user_agent: impl Into<String>, viewport_width: u32) -> Self {
        Self {
            user_agent: user_agent.into(),
            viewport_width,
        }
    }
}

/// Pick the initial platform for the supplied environment.
#[must_use]
pub fn detect_platform(env: &Environment) -> Platform {
    let ua = env.user_agent.to_lowercase();
    let android = ua.contains("android");
    if android && (ua.contains("tv") || env.viewport_width > ANDROID_TV_MIN_WIDTH) {
        Platform::AndroidTv
    } else if android {
        Platform::Android
    } else if ua.contains("iphone") || ua.contains("ipad") {
        Platform::Ios
    } else if ua.contains("macintosh") || ua.contains("mac os") {
        Platform::Mac
    } else if ua.contains("linux") {
        Platform::Linux
    } else {
        Platform::Windows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const PIXEL_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Mobile Safari/537.36";
    const BRAVIA_UA: &str = "Mozilla/5.0 (Linux; Android 10; BRAVIA 4K GB ATV3 Build/QTG3.200305.006.S292; wv) AppleWebKit/537.36";
    const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_2 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148";
    const IPAD_UA: &str = "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X) AppleWebKit/605.1.15";
    const MAC_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Safari/605.1.15";
    const LINUX_UA: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:122.0) Gecko/20100101 Firefox/122.0";
    const WINDOWS_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36";

    fn detect(ua: &str, width: u32) -> Platform {
        detect_platform(&Environment::new(ua, width))
    }

    #[test]
    fn android_width_splits_phone_and_tv() {
        assert_eq!(detect("android", 1200), Platform::AndroidTv);
        assert_eq!(detect("android", 800), Platform::Android);
        assert_eq!(detect(PIXEL_UA, 412), Platform::Android);
    }

    #[test]
    fn width_threshold_is_exclusive() {
        assert_eq!(detect(PIXEL_UA, ANDROID_TV_MIN_WIDTH), Platform::Android);
        assert_eq!(
            detect(PIXEL_UA, ANDROID_TV_MIN_WIDTH + 1),
            Platform::AndroidTv
        );
    }

    #[test]
    fn tv_marker_wins_regardless_of_width() {
        assert_eq!(detect("Android TV", 640), Platform::AndroidTv);
        assert_eq!(detect(BRAVIA_UA, 960), Platform::AndroidTv);
    }

    #[test]
    fn apple_devices_are_told_apart() {
        assert_eq!(detect(IPHONE_UA, 390), Platform::Ios);
        assert_eq!(detect(IPAD_UA, 1024), Platform::Ios);
        assert_eq!(detect(MAC_UA, 1440), Platform::Mac);
    }

    #[test]
    fn desktop_fallbacks() {
        assert_eq!(detect(LINUX_UA, 1920), Platform::Linux);
        assert_eq!(detect(WINDOWS_UA, 1920), Platform::Windows);
        assert_eq!(detect("", 0), Platform::Windows);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(detect("IPHONE", 390), Platform::Ios);
        assert_eq!(detect("ANDROID", 400), Platform::Android);
    }

    proptest! {
        #[test]
        fn detection_is_pure(ua in ".{0,80}", width in 0u32..4000) {
            let env = Environment::new(ua, width);
            prop_assert_eq!(detect_platform(&env), detect_platform(&env.clone()));
        }

        #[test]
        fn non_android_ignores_width(ua in "[a-z ]{0,40}", a in 0u32..4000, b in 0u32..4000) {
            prop_assume!(!ua.contains("android"));
            prop_assert_eq!(detect(&ua, a), detect(&ua, b));
        }
    }
}
