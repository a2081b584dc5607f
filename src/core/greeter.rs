use crate::core::{Clock, GreetingRequest, Language, SystemClock};

/// Spanish greeting, regardless of any language setting.
///
/// ```
/// assert_eq!(saludador::simple_greet("Juan"), "¡Hola, Juan!");
/// ```
pub fn simple_greet(name: &str) -> String {
    format!("¡Hola, {}!", name)
}

/// Greeting from the template for `language`, optionally stamped with the
/// current local time.
///
/// Codes without a template (`it`, `pt`, `pl`, or anything unknown) use the
/// Spanish one.
pub fn custom_greet(name: &str, language: &str, include_time: bool) -> String {
    custom_greet_with_clock(name, language, include_time, &SystemClock)
}

pub fn custom_greet_with_clock<C: Clock + ?Sized>(
    name: &str,
    language: &str,
    include_time: bool,
    clock: &C,
) -> String {
    let mut greeting = match template_for(language) {
        Some(template) => render(template, name),
        None => {
            tracing::debug!("No template for language '{}', using Spanish", language);
            render(SPANISH_TEMPLATE, name)
        }
    };

    if include_time {
        let now = clock.now().format("%H:%M");
        greeting.push_str(&format!(" (Current time: {})", now));
    }

    greeting
}

/// 依據請求選擇格式化路徑：西班牙語且不含時間時使用簡單問候
pub fn greet<C: Clock + ?Sized>(request: &GreetingRequest, clock: &C) -> String {
    if request.language == Language::Es && !request.include_time {
        tracing::debug!("Using simple greeting for '{}'", request.name);
        simple_greet(&request.name)
    } else {
        tracing::debug!(
            "Using template greeting: language={}, include_time={}",
            request.language,
            request.include_time
        );
        custom_greet_with_clock(
            &request.name,
            request.language.code(),
            request.include_time,
            clock,
        )
    }
}

const NAME_PLACEHOLDER: &str = "{name}";
const SPANISH_TEMPLATE: &str = "¡Hola, {name}! ¿Cómo estás?";

const TEMPLATES: &[(&str, &str)] = &[
    ("es", SPANISH_TEMPLATE),
    ("en", "Hello, {name}! How are you?"),
    ("fr", "Bonjour, {name}! Comment allez-vous?"),
];

fn template_for(language: &str) -> Option<&'static str> {
    TEMPLATES
        .iter()
        .find(|(code, _)| *code == language)
        .map(|(_, template)| *template)
}

fn render(template: &str, name: &str) -> String {
    template.replacen(NAME_PLACEHOLDER, name, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    struct FixedClock(NaiveTime);

    impl Clock for FixedClock {
        fn now(&self) -> NaiveTime {
            self.0
        }
    }

    fn at(hour: u32, minute: u32) -> FixedClock {
        FixedClock(NaiveTime::from_hms_opt(hour, minute, 30).unwrap())
    }

    #[test]
    fn test_simple_greet() {
        assert_eq!(simple_greet("World"), "¡Hola, World!");
        assert_eq!(simple_greet("María García"), "¡Hola, María García!");
        assert_eq!(simple_greet("123"), "¡Hola, 123!");
        assert_eq!(simple_greet(""), "¡Hola, !");
    }

    #[test]
    fn test_custom_greet_templates() {
        assert_eq!(custom_greet("Ana", "es", false), "¡Hola, Ana! ¿Cómo estás?");
        assert_eq!(custom_greet("John", "en", false), "Hello, John! How are you?");
        assert_eq!(
            custom_greet("Pierre", "fr", false),
            "Bonjour, Pierre! Comment allez-vous?"
        );
    }

    #[test]
    fn test_custom_greet_falls_back_to_spanish() {
        let spanish = custom_greet("Ana", "es", false);
        for code in ["de", "it", "pt", "pl", "", "EN"] {
            assert_eq!(custom_greet("Ana", code, false), spanish, "code {:?}", code);
        }
    }

    #[test]
    fn test_name_containing_placeholder_is_not_expanded_twice() {
        assert_eq!(
            custom_greet("{name}", "en", false),
            "Hello, {name}! How are you?"
        );
    }

    #[test]
    fn test_include_time_uses_clock() {
        let greeting = custom_greet_with_clock("Ana", "es", true, &at(9, 5));
        assert_eq!(greeting, "¡Hola, Ana! ¿Cómo estás? (Current time: 09:05)");

        let greeting = custom_greet_with_clock("John", "en", true, &at(23, 59));
        assert_eq!(greeting, "Hello, John! How are you? (Current time: 23:59)");
    }

    #[test]
    fn test_without_time_has_no_suffix() {
        let greeting = custom_greet_with_clock("Ana", "es", false, &at(14, 5));
        assert!(!greeting.contains("time:"));
        assert!(!greeting.contains("14:05"));
    }

    #[test]
    fn test_greet_routing() {
        let clock = at(14, 5);

        let request = GreetingRequest::new("Juan");
        assert_eq!(greet(&request, &clock), "¡Hola, Juan!");

        let request = GreetingRequest::new("Juan").with_time(true);
        assert_eq!(
            greet(&request, &clock),
            "¡Hola, Juan! ¿Cómo estás? (Current time: 14:05)"
        );

        let request = GreetingRequest::new("Alice").with_language(Language::En);
        assert_eq!(greet(&request, &clock), "Hello, Alice! How are you?");

        let request = GreetingRequest::new("Luigi").with_language(Language::It);
        assert_eq!(greet(&request, &clock), "¡Hola, Luigi! ¿Cómo estás?");
    }
}
