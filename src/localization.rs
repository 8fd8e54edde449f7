use anyhow::{anyhow, Result};
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

/// Fluent sources embedded at build time, keyed by language
const RESOURCES: [(&str, &str); 2] = [
    ("en", include_str!("../locales/en/main.ftl")),
    ("ru", include_str!("../locales/ru/main.ftl")),
];

/// Localization manager for the movie bot
pub struct LocalizationManager {
    bundles: HashMap<String, FluentBundle<FluentResource>>,
    default_language: String,
}

impl LocalizationManager {
    /// Create a localization manager that falls back to `default_language`
    pub fn new(default_language: &str) -> Result<Self> {
        let mut bundles = HashMap::new();

        for (language, source) in RESOURCES {
            let locale: LanguageIdentifier = language.parse()?;
            let bundle = Self::create_bundle(locale, source)?;
            bundles.insert(language.to_string(), bundle);
        }

        if !bundles.contains_key(default_language) {
            return Err(anyhow!("Unsupported default language: {default_language}"));
        }

        Ok(Self {
            bundles,
            default_language: default_language.to_string(),
        })
    }

    /// Create a fluent bundle for a specific locale
    fn create_bundle(
        locale: LanguageIdentifier,
        source: &str,
    ) -> Result<FluentBundle<FluentResource>> {
        let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);
        // Telegram renders the bidi isolation marks literally
        bundle.set_use_isolating(false);

        let resource = FluentResource::try_new(source.to_string())
            .map_err(|(_, errors)| anyhow!("Invalid Fluent resource for {locale}: {errors:?}"))?;
        bundle
            .add_resource(resource)
            .map_err(|errors| anyhow!("Conflicting Fluent messages for {locale}: {errors:?}"))?;

        Ok(bundle)
    }

    /// Check whether a language has its own bundle
    pub fn is_language_supported(&self, language: &str) -> bool {
        self.bundles.contains_key(language)
    }

    /// Resolve a Telegram language code such as `en-US` to a supported language
    pub fn resolve_language(&self, language_code: Option<&str>) -> &str {
        language_code
            .and_then(|code| code.split(['-', '_']).next())
            .map(str::to_lowercase)
            .and_then(|primary| {
                self.bundles
                    .get_key_value(primary.as_str())
                    .map(|(key, _)| key.as_str())
            })
            .unwrap_or(self.default_language.as_str())
    }

    /// Get a localized message in a specific language
    pub fn get_message_in_language(
        &self,
        key: &str,
        language: &str,
        args: Option<&HashMap<&str, &str>>,
    ) -> String {
        let bundle = match self
            .bundles
            .get(language)
            .or_else(|| self.bundles.get(&self.default_language))
        {
            Some(bundle) => bundle,
            None => return format!("Missing translation: {key}"),
        };

        let msg = match bundle.get_message(key) {
            Some(msg) => msg,
            None => return format!("Missing translation: {key}"),
        };

        let pattern = match msg.value() {
            Some(pattern) => pattern,
            None => return format!("Missing value for key: {key}"),
        };

        let fluent_args = args.map(|args| {
            let mut fluent_args = FluentArgs::new();
            for (name, value) in args {
                fluent_args.set(*name, *value);
            }
            fluent_args
        });

        let mut errors = vec![];
        bundle
            .format_pattern(pattern, fluent_args.as_ref(), &mut errors)
            .into_owned()
    }

    /// Get a localized message for a user's language code
    pub fn t_lang(&self, key: &str, language_code: Option<&str>) -> String {
        let language = self.resolve_language(language_code);
        self.get_message_in_language(key, language, None)
    }

    /// Get a localized message with arguments for a user's language code
    pub fn t_args_lang(
        &self,
        key: &str,
        args: &[(&str, &str)],
        language_code: Option<&str>,
    ) -> String {
        let language = self.resolve_language(language_code);
        let args_map: HashMap<&str, &str> = args.iter().cloned().collect();
        self.get_message_in_language(key, language, Some(&args_map))
    }
}
