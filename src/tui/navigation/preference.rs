//! # Preference Channel
//!
//! Lets content declare navigation-bar settings that an ancestor renders,
//! without threading parameters down (or values up) by hand.
//!
//! ```text
//!   NavigationContainer ◀── commit() ── Preferences ◀── publish() ── content
//!         (observer)                    (one pass)                 (descendants)
//! ```
//!
//! ## One pass
//!
//! Every render the container creates a fresh [`Preferences`], asks its
//! content to publish into it, then calls [`PreferenceChannel::commit`].
//! Commit resolves each observed key and calls the registered callback for
//! keys whose value changed since the previous pass.
//!
//! ## Resolution
//!
//! Values are folded through [`PreferenceKey::reduce`] in publish order,
//! starting from the key's default. All navigation keys use the default
//! reduce (replace), so **the last value evaluated wins**. Publish order is
//! depth-first post-order: a component publishes its children first and its
//! own values after. A modifier therefore overrides whatever the view it
//! wraps declared, and a later sibling overrides an earlier one. A key nobody
//! published resolves to its default.

use std::any::{Any, TypeId};
use std::fmt;
use std::marker::PhantomData;

use log::debug;
use ratatui::style::Color;

/// A named, typed preference with a default and a combine rule.
pub trait PreferenceKey: 'static {
    type Value: Clone + PartialEq + fmt::Debug + 'static;

    /// Human-readable name for logs.
    const NAME: &'static str;

    fn default_value() -> Self::Value;

    /// Fold the next published value into the accumulated one.
    fn reduce(value: &mut Self::Value, next: Self::Value) {
        *value = next;
    }
}

/// Navigation title. Default: empty.
pub struct NavigationTitle;

impl PreferenceKey for NavigationTitle {
    type Value = String;
    const NAME: &'static str = "title";

    fn default_value() -> String {
        String::new()
    }
}

/// Line beneath the title. Default: none.
pub struct NavigationSubtitle;

impl PreferenceKey for NavigationSubtitle {
    type Value = Option<String>;
    const NAME: &'static str = "subtitle";

    fn default_value() -> Option<String> {
        None
    }
}

/// Hides the back item. Default: hidden.
pub struct NavigationBackButtonHidden;

impl PreferenceKey for NavigationBackButtonHidden {
    type Value = bool;
    const NAME: &'static str = "back_button_hidden";

    fn default_value() -> bool {
        true
    }
}

/// Removes the bar entirely. Default: shown.
pub struct NavigationBarHidden;

impl PreferenceKey for NavigationBarHidden {
    type Value = bool;
    const NAME: &'static str = "bar_hidden";

    fn default_value() -> bool {
        false
    }
}

/// Bar background. Default: `Color::Reset` (clear).
pub struct NavigationBackgroundColor;

impl PreferenceKey for NavigationBackgroundColor {
    type Value = Color;
    const NAME: &'static str = "background_color";

    fn default_value() -> Color {
        Color::Reset
    }
}

/// Color for bar text and items. Default: none (the style decides).
pub struct NavigationTintColor;

impl PreferenceKey for NavigationTintColor {
    type Value = Option<Color>;
    const NAME: &'static str = "tint_color";

    fn default_value() -> Option<Color> {
        None
    }
}

struct Published {
    key: TypeId,
    value: Box<dyn Any>,
}

/// Values published during one render pass, in evaluation order.
#[derive(Default)]
pub struct Preferences {
    published: Vec<Published>,
}

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish<K: PreferenceKey>(&mut self, value: K::Value) {
        self.published.push(Published {
            key: TypeId::of::<K>(),
            value: Box::new(value),
        });
    }

    /// Fold every value published for `K`, starting from its default.
    pub fn resolve<K: PreferenceKey>(&self) -> K::Value {
        let mut resolved = K::default_value();
        for value in self.values::<K>() {
            K::reduce(&mut resolved, value.clone());
        }
        resolved
    }

    pub fn is_published<K: PreferenceKey>(&self) -> bool {
        self.values::<K>().next().is_some()
    }

    fn values<K: PreferenceKey>(&self) -> impl Iterator<Item = &K::Value> {
        self.published
            .iter()
            .filter(|p| p.key == TypeId::of::<K>())
            .filter_map(|p| p.value.downcast_ref::<K::Value>())
    }
}

trait PreferenceObserver<T> {
    /// Returns `true` if the resolved value changed and the callback ran.
    fn notify(&mut self, preferences: &Preferences, target: &mut T) -> bool;
}

struct KeyObserver<K: PreferenceKey, F> {
    last: K::Value,
    on_change: F,
    _key: PhantomData<K>,
}

impl<T, K, F> PreferenceObserver<T> for KeyObserver<K, F>
where
    K: PreferenceKey,
    F: FnMut(&mut T, K::Value),
{
    fn notify(&mut self, preferences: &Preferences, target: &mut T) -> bool {
        let resolved = preferences.resolve::<K>();
        if resolved == self.last {
            return false;
        }
        debug!("preference {} changed: {:?} -> {:?}", K::NAME, self.last, resolved);
        self.last = resolved.clone();
        (self.on_change)(target, resolved);
        true
    }
}

/// Observer side of the channel. `T` is whatever the observer updates,
/// usually the container's local bar state.
pub struct PreferenceChannel<T> {
    observers: Vec<Box<dyn PreferenceObserver<T>>>,
}

impl<T> Default for PreferenceChannel<T> {
    fn default() -> Self {
        Self { observers: Vec::new() }
    }
}

impl<T: 'static> PreferenceChannel<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `on_change` for `K`. The first pass only calls it if the
    /// resolved value differs from `K::default_value()`.
    pub fn observe<K: PreferenceKey>(&mut self, on_change: impl FnMut(&mut T, K::Value) + 'static) {
        self.observers.push(Box::new(KeyObserver::<K, _> {
            last: K::default_value(),
            on_change,
            _key: PhantomData,
        }));
    }

    /// End a pass: notify observers whose key resolved to a new value.
    /// Returns `true` if any did, meaning dependents should re-render.
    pub fn commit(&mut self, preferences: &Preferences, target: &mut T) -> bool {
        let mut changed = false;
        for observer in &mut self.observers {
            changed |= observer.notify(preferences, target);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Sink {
        title: Option<String>,
        calls: usize,
    }

    fn title_channel() -> PreferenceChannel<Sink> {
        let mut channel = PreferenceChannel::new();
        channel.observe::<NavigationTitle>(|sink: &mut Sink, title| {
            sink.title = Some(title);
            sink.calls += 1;
        });
        channel
    }

    #[test]
    fn test_defaults_when_nothing_published() {
        let prefs = Preferences::new();
        assert_eq!(prefs.resolve::<NavigationTitle>(), "");
        assert_eq!(prefs.resolve::<NavigationSubtitle>(), None);
        assert!(prefs.resolve::<NavigationBackButtonHidden>());
        assert!(!prefs.resolve::<NavigationBarHidden>());
        assert_eq!(prefs.resolve::<NavigationBackgroundColor>(), Color::Reset);
        assert_eq!(prefs.resolve::<NavigationTintColor>(), None);
    }

    #[test]
    fn test_last_publish_wins() {
        let mut prefs = Preferences::new();
        prefs.publish::<NavigationTitle>("first".to_string());
        prefs.publish::<NavigationTitle>("second".to_string());
        prefs.publish::<NavigationTitle>("third".to_string());
        assert_eq!(prefs.resolve::<NavigationTitle>(), "third");
    }

    #[test]
    fn test_keys_do_not_interfere() {
        let mut prefs = Preferences::new();
        prefs.publish::<NavigationBarHidden>(true);
        assert!(prefs.resolve::<NavigationBarHidden>());
        assert!(prefs.resolve::<NavigationBackButtonHidden>());
        assert!(!prefs.is_published::<NavigationBackButtonHidden>());
    }

    #[test]
    fn test_commit_skips_unchanged_default() {
        let mut channel = title_channel();
        let mut sink = Sink::default();
        assert!(!channel.commit(&Preferences::new(), &mut sink));
        assert_eq!(sink.calls, 0);
    }

    #[test]
    fn test_commit_fires_only_on_change() {
        let mut channel = title_channel();
        let mut sink = Sink::default();
        let mut prefs = Preferences::new();
        prefs.publish::<NavigationTitle>("Inbox".to_string());

        assert!(channel.commit(&prefs, &mut sink));
        assert!(!channel.commit(&prefs, &mut sink));
        assert_eq!(sink.calls, 1);
        assert_eq!(sink.title.as_deref(), Some("Inbox"));
    }

    #[test]
    fn test_unpublishing_reverts_to_default() {
        let mut channel = title_channel();
        let mut sink = Sink::default();
        let mut prefs = Preferences::new();
        prefs.publish::<NavigationTitle>("Inbox".to_string());
        channel.commit(&prefs, &mut sink);

        assert!(channel.commit(&Preferences::new(), &mut sink));
        assert_eq!(sink.title.as_deref(), Some(""));
    }

    struct Counter;

    impl PreferenceKey for Counter {
        type Value = u32;
        const NAME: &'static str = "counter";

        fn default_value() -> u32 {
            0
        }

        fn reduce(value: &mut u32, next: u32) {
            *value += next;
        }
    }

    #[test]
    fn test_custom_reduce_is_honored() {
        let mut prefs = Preferences::new();
        prefs.publish::<Counter>(2);
        prefs.publish::<Counter>(3);
        assert_eq!(prefs.resolve::<Counter>(), 5);
    }
}
