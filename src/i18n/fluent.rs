// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Locale used when nothing else matches.
pub const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = FluentResource::try_new(source).unwrap_or_else(|(partial, errors)| {
                log::warn!("{filename}: {} Fluent syntax error(s)", errors.len());
                partial
            });

            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            // Isolation marks would leak into plain-text widgets.
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                log::warn!("{filename}: {} duplicate message(s)", errors.len());
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or_else(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    /// Switches the active locale; unknown locales are ignored.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key`, substituting `{ $name }` placeables from `args`.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, value.to_string());
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [
        cli_lang,
        config.general.language.clone(),
        sys_locale::get_locale(),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(|raw| raw.parse::<LanguageIdentifier>().ok())
        .find(|lang| available.contains(lang))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn langid(raw: &str) -> LanguageIdentifier {
        raw.parse().expect("valid language identifier")
    }

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn embedded_locales_are_discovered() {
        let i18n = english();
        assert!(i18n.available_locales.contains(&langid("en-US")));
        assert!(i18n.available_locales.contains(&langid("fr")));
    }

    #[test]
    fn cli_language_wins_over_config() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let i18n = I18n::new(Some("fr".to_string()), &config);
        assert_eq!(i18n.current_locale(), &langid("fr"));
    }

    #[test]
    fn config_language_used_without_cli() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let i18n = I18n::new(None, &config);
        assert_eq!(i18n.current_locale(), &langid("fr"));
    }

    #[test]
    fn unknown_cli_language_falls_through() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let i18n = I18n::new(Some("xx-YY".to_string()), &config);
        assert_eq!(i18n.current_locale(), &langid("fr"));
    }

    #[test]
    fn tab_labels_translate() {
        let i18n = english();
        assert_eq!(i18n.tr("toolbar-tab-plan"), "Plan");
        assert_eq!(i18n.tr("toolbar-tab-more"), "More");
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = english();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn args_are_substituted_without_isolation_marks() {
        let i18n = english();
        let text = i18n.tr_with_args("notification-action-failed", &[("detail", "disk full")]);
        assert!(text.ends_with("disk full"), "got {text:?}");
    }

    #[test]
    fn set_locale_ignores_unknown_locale() {
        let mut i18n = english();
        i18n.set_locale(langid("de"));
        assert_eq!(i18n.current_locale(), &langid("en-US"));
        i18n.set_locale(langid("fr"));
        assert_eq!(i18n.current_locale(), &langid("fr"));
    }
}
