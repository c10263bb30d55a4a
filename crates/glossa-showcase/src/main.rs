#![forbid(unsafe_code)]

//! Glossa showcase: builds a small multi-locale dictionary and walks the
//! library surface: negotiation, plain and numeric rendering, formatting
//! primitives, and the coverage report.

use chrono::{TimeZone, Utc};
use glossa::config::I18nConfig;
use glossa::dictionary::{Dictionary, LocaleEntries};
use glossa::format::{self, DateStyle};
use glossa::locale::is_rtl;
use glossa::translator::Translator;

const EN: &str = r#"{
    "welcome": "Welcome back, {name}!",
    "inbox": {
        "singular": "You have {n} message",
        "plural": "You have {n} messages",
        "ranges": [{"min": 0, "max": 0, "children": "Inbox zero. Enjoy it."}],
        "default": "You have {n} messages"
    }
}"#;

const ES: &str = r#"{
    "welcome": "¡Bienvenido de nuevo, {name}!",
    "inbox": {
        "singular": "Tienes {n} mensaje",
        "plural": "Tienes {n} mensajes",
        "default": "Tienes {n} mensajes"
    }
}"#;

const AR: &str = r#"{
    "welcome": "مرحبا بعودتك، {name}!",
    "inbox": {
        "zero": "لا رسائل",
        "singular": "لديك رسالة واحدة",
        "dual": "لديك رسالتان",
        "paucal": "لديك {n} رسائل",
        "plural": "لديك {n} رسالة",
        "default": "لديك {n} رسالة"
    }
}"#;

fn build_translator() -> Result<Translator, glossa::I18nError> {
    let mut dictionary = Dictionary::new();
    dictionary.add_locale("en", LocaleEntries::from_json_str(EN)?);
    dictionary.add_locale("es", LocaleEntries::from_json_str(ES)?);
    dictionary.add_locale("ar", LocaleEntries::from_json_str(AR)?);

    let config = I18nConfig::new()
        .default_locale("en")
        .approved_locales(["en", "es", "ar"])
        .overridden_from_env();
    Ok(Translator::new(config).with_dictionary("default", dictionary))
}

fn main() {
    let translator = match build_translator() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Failed to build dictionaries: {e}");
            std::process::exit(1);
        }
    };

    // A browser-style ranked preference list.
    let requested = ["es-MX", "en-US"];
    let locale = translator.resolve_locale(&requested).to_string();
    println!("requested {requested:?} -> serving '{locale}'");

    if let Some(line) = translator.t(&locale, "welcome", &[("name", "Ada")]) {
        println!("  {line}");
    }
    for n in [0.0, 1.0, 2.0, 5.0, 1234.0] {
        if let Some(line) = translator.t_numeric(&locale, "inbox", n, &[]) {
            println!("  n={n:<6} {line}");
        }
    }

    println!("\nArabic plural ladder (direction rtl: {}):", is_rtl("ar"));
    for n in [0.0, 1.0, 2.0, 5.0, 11.0, 100.0] {
        if let Some(line) = translator.t_numeric("ar", "inbox", n, &[]) {
            println!("  n={n:<6} {line}");
        }
    }

    let launch = Utc
        .with_ymd_and_hms(2024, 7, 14, 9, 30, 0)
        .single()
        .unwrap_or_default();
    println!("\nFormatting primitives:");
    for tag in ["en", "de", "fr", "ja"] {
        println!(
            "  [{tag}] {} | {} | {}",
            format::format_currency(1234.5, "EUR", tag),
            format::format_percent(0.85, tag),
            format::format_date(&launch, DateStyle::Long, tag),
        );
    }

    println!("\nCoverage:");
    match translator.dictionary("default") {
        Ok(dictionary) => {
            let report = dictionary.coverage_report();
            for lc in report.locales {
                println!(
                    "  {:<6} {:>5.1}%  missing: {:?}",
                    lc.locale, lc.coverage_percent, lc.missing
                );
            }
        }
        Err(e) => {
            eprintln!("coverage unavailable: {e}");
            std::process::exit(1);
        }
    }
}
