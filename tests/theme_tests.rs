//! Integration tests for the time-aware theme engine
//!
//! Exercises persistence round trips and the sunset transition through the
//! public store API with a fixed clock.

use portfolio::storage::Storage;
use portfolio::theme::{
    Clock, NO_TRANSITION, ResolvedTheme, THEME_KEY, ThemeMode, ThemeSnapshot, ThemeStore,
    long_press_mode, sunset_background, tap_mode,
};

mod persistence_tests {
    use super::*;

    fn store_at(storage: &Storage, minute: u16) -> ThemeStore {
        let mut store = ThemeStore::new(storage.clone(), Clock::Fixed(minute));
        store.load();
        store
    }

    #[test]
    fn test_mode_survives_reload() {
        let storage = Storage::in_memory();
        let mut first = store_at(&storage, 12 * 60);
        first.set_mode(ThemeMode::Light);

        let second = store_at(&storage, 12 * 60);
        assert_eq!(second.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_default_mode_is_auto() {
        let storage = Storage::in_memory();
        let store = store_at(&storage, 12 * 60);
        assert_eq!(store.mode(), ThemeMode::Auto);
    }

    #[test]
    fn test_unloaded_store_reports_dark_without_transition() {
        let store = ThemeStore::new(Storage::in_memory(), Clock::Fixed(12 * 60));
        let snapshot = store.snapshot();
        assert!(!store.is_loaded());
        assert_eq!(snapshot.theme, ResolvedTheme::Dark);
        assert_eq!(snapshot.sunset_factor, NO_TRANSITION);
        assert!(!snapshot.in_transition());
    }

    #[test]
    fn test_garbage_persisted_mode_falls_back_to_auto() {
        let storage = Storage::in_memory();
        storage.set(THEME_KEY, "sepia").expect("seed failed");
        let store = store_at(&storage, 12 * 60);
        assert_eq!(store.mode(), ThemeMode::Auto);
    }
}

mod sunset_tests {
    use super::*;

    fn snapshot_at(minute: u16) -> ThemeSnapshot {
        let mut store = ThemeStore::new(Storage::in_memory(), Clock::Fixed(minute));
        store.load();
        store.snapshot()
    }

    #[test]
    fn test_auto_midday_is_light() {
        let snap = snapshot_at(12 * 60);
        assert_eq!(snap.theme, ResolvedTheme::Light);
        assert!(!snap.in_transition());
    }

    #[test]
    fn test_auto_night_is_dark() {
        for minute in [0, 5 * 60 + 59, 17 * 60, 23 * 60 + 59] {
            let snap = snapshot_at(minute);
            assert_eq!(snap.theme, ResolvedTheme::Dark);
            assert!(!snap.in_transition());
        }
    }

    #[test]
    fn test_transition_window_reports_factor() {
        let snap = snapshot_at(16 * 60 + 30);
        assert!(snap.in_transition());
        assert!((snap.sunset_factor - 0.5).abs() < f32::EPSILON);
        assert_eq!(snap.theme, ResolvedTheme::Light);

        let snap = snapshot_at(16 * 60 + 45);
        assert_eq!(snap.theme, ResolvedTheme::Dark);
        assert!((snap.sunset_factor - 0.75).abs() < f32::EPSILON);
    }

    #[test]
    fn test_background_endpoints_match_the_palettes() {
        assert_eq!(sunset_background(0.0), "210 40% 98%");
        assert_eq!(sunset_background(1.0), "222 47% 4%");
    }
}

mod gesture_tests {
    use super::*;

    #[test]
    fn test_tap_flips_and_persists() {
        let storage = Storage::in_memory();
        let mut store = ThemeStore::new(storage.clone(), Clock::Fixed(12 * 60));
        store.load();

        // Auto resolves light at midday, so the first tap lands on dark.
        let snap = store.snapshot();
        store.set_mode(tap_mode(snap.mode, snap.theme));
        assert_eq!(store.mode(), ThemeMode::Dark);

        let snap = store.snapshot();
        store.set_mode(tap_mode(snap.mode, snap.theme));
        assert_eq!(store.mode(), ThemeMode::Light);

        let mut reloaded = ThemeStore::new(storage, Clock::Fixed(12 * 60));
        reloaded.load();
        assert_eq!(reloaded.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_long_press_toggles_auto() {
        let mut store = ThemeStore::new(Storage::in_memory(), Clock::Fixed(12 * 60));
        store.load();

        let snap = store.snapshot();
        assert_eq!(snap.mode, ThemeMode::Auto);
        store.set_mode(long_press_mode(snap.mode, snap.theme));
        assert_eq!(store.mode(), ThemeMode::Light);

        let snap = store.snapshot();
        store.set_mode(long_press_mode(snap.mode, snap.theme));
        assert_eq!(store.mode(), ThemeMode::Auto);
    }
}
