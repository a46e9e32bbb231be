// SPDX-License-Identifier: MPL-2.0
use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

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
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((_, errors)) => {
                    eprintln!("Skipping {filename}: {} parse error(s)", errors.len());
                    continue;
                }
            };
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                eprintln!("Skipping {filename}: {} duplicate message(s)", errors.len());
                continue;
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

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key` with named Fluent arguments.
    ///
    /// Values that parse as integers are passed as Fluent numbers.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            // Integers go in as numbers so plural selectors can match them.
            match value.parse::<i64>() {
                Ok(number) => fluent_args.set(*name, number),
                Err(_) => fluent_args.set(*name, *value),
            }
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
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

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let supported = |raw: &str| {
        raw.parse::<LanguageIdentifier>()
            .ok()
            .filter(|lang| available.contains(lang))
    };

    // 1. CLI args
    if let Some(lang) = cli_lang.as_deref().and_then(supported) {
        return Some(lang);
    }

    // 2. Config file
    if let Some(lang) = config.general.language.as_deref().and_then(supported) {
        return Some(lang);
    }

    // 3. OS locale
    sys_locale::get_locale().as_deref().and_then(supported)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn resolve_locale_prefers_cli() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let lang = resolve_locale(Some("fr".to_string()), &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_uses_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_skips_unsupported_cli_lang() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(Some("xx-YY".to_string()), &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_default_is_available_or_none() {
        let lang = resolve_locale(None, &Config::default(), &available());
        // Depends on the OS locale.
        if let Some(l) = lang {
            assert!(available().contains(&l));
        }
    }

    #[test]
    fn embedded_bundles_are_loaded() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert!(i18n.available_locales.contains(&default_locale()));
        assert!(i18n.available_locales.contains(&"fr".parse().unwrap()));
        assert_eq!(i18n.tr("search-button"), "Search");
    }

    #[test]
    fn tr_with_args_substitutes_values() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let text = i18n.tr_with_args("gallery-count", &[("shown", "1"), ("total", "2")]);
        assert!(text.contains('1') && text.contains('2'), "got {text}");
        assert!(!text.starts_with("MISSING"));
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    fn message_keys(file: &str) -> Vec<String> {
        let source = Asset::get(file).expect("embedded bundle");
        let text = String::from_utf8_lossy(source.data.as_ref()).to_string();
        let mut keys: Vec<String> = text
            .lines()
            .filter(|line| !line.starts_with(char::is_whitespace))
            .filter_map(|line| line.split_once(" ="))
            .map(|(key, _)| key.trim().to_string())
            .filter(|key| !key.is_empty() && !key.starts_with('#') && !key.starts_with('.'))
            .collect();
        keys.sort();
        keys
    }

    #[test]
    fn locales_define_the_same_messages() {
        let en = I18n::new(Some("en-US".to_string()), &Config::default());
        let fr = I18n::new(Some("fr".to_string()), &Config::default());
        let en_keys = message_keys("en-US.ftl");
        assert!(!en_keys.is_empty());
        assert_eq!(en_keys, message_keys("fr.ftl"));

        for key in &en_keys {
            assert!(en.bundles[en.current_locale()].has_message(key), "en-US lacks {key}");
            assert!(fr.bundles[fr.current_locale()].has_message(key), "fr lacks {key}");
        }
    }

    #[test]
    fn batch_success_count_is_pluralized() {
        let en = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(
            en.tr_with_args("notification-batch-success", &[("count", "1")]),
            "1 image analyzed."
        );
        assert_eq!(
            en.tr_with_args("notification-batch-success", &[("count", "3")]),
            "3 images analyzed."
        );
    }
}
