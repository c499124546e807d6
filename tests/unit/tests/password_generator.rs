use anyhow::Result;
use passforge_password::{
    charset::SYMBOLS, Error, GenerationOptions, PasswordGenerator,
};
use passforge_unit_tests::{init_tracing, option_matrix, seeded};
use secrecy::ExposeSecret;

fn assert_classes(password: &str, options: &GenerationOptions) {
    if options.include_uppercase {
        assert!(password.chars().any(|c| c.is_ascii_uppercase()));
    }
    if options.include_lowercase {
        assert!(password.chars().any(|c| c.is_ascii_lowercase()));
    }
    if options.include_numbers {
        assert!(password.chars().any(|c| c.is_ascii_digit()));
    }
    if options.include_symbols {
        assert!(password.chars().any(|c| SYMBOLS.contains(c)));
    }
}

#[test]
fn passgen_length_and_classes() -> Result<()> {
    init_tracing();
    let mut generator = seeded(42);
    for length in [1, 2, 3, 4, 5, 8, 16, 64] {
        for options in option_matrix(length) {
            let password = generator.generate(&options)?;
            let password = password.expose_secret();
            assert_eq!(
                length.max(options.enabled_classes()),
                password.chars().count(),
                "{:#?}",
                options
            );
            assert_classes(password, &options);
        }
    }
    Ok(())
}

#[test]
fn passgen_characters_within_charset() -> Result<()> {
    let options = GenerationOptions::new_alpha_numeric(256)
        .exclude_similar()
        .exclude_ambiguous();
    let password = seeded(7).generate(&options)?;
    assert!(password.expose_secret().chars().all(|c| {
        c.is_ascii_alphanumeric() && !"il1Lo0O".contains(c)
            || "Lo".contains(c)
    }));
    Ok(())
}

#[test]
fn passgen_seeded_is_reproducible() -> Result<()> {
    let options = GenerationOptions::default();
    let first = seeded(1).generate(&options)?;
    let second = seeded(1).generate(&options)?;
    assert_eq!(first.expose_secret(), second.expose_secret());
    Ok(())
}

#[test]
fn passgen_zero_length() {
    let options = GenerationOptions::new_ascii_printable(0);
    let result = PasswordGenerator::new().generate(&options);
    assert!(matches!(result, Err(Error::InvalidLength(0))));
}

#[test]
fn passgen_no_classes() {
    let options = GenerationOptions {
        exclude_similar: true,
        exclude_ambiguous: true,
        ..GenerationOptions::new(12)
    };
    let result = PasswordGenerator::new().generate(&options);
    assert!(matches!(result, Err(Error::Configuration(_))));
}

#[test]
fn passgen_zero_length_checked_before_charset() {
    let result = PasswordGenerator::new().generate(&GenerationOptions::new(0));
    assert!(matches!(result, Err(Error::InvalidLength(0))));
}

#[test]
fn passgen_generate_multiple() -> Result<()> {
    let options = GenerationOptions::new_ascii_printable(12);
    let count = 5;
    let passwords =
        PasswordGenerator::new().generate_multiple(count, &options)?;
    assert_eq!(count, passwords.len());
    for password in &passwords {
        assert_eq!(options.len(), password.expose_secret().len());
        assert_classes(password.expose_secret(), &options);
    }
    Ok(())
}

#[test]
fn passgen_generate_multiple_huge_count_fails_fast() {
    let options = GenerationOptions::new(8);
    let mut generator = PasswordGenerator::new();
    let result = generator.generate_multiple(usize::MAX / 2, &options);
    assert!(matches!(result, Err(Error::Configuration(_))));
    let result = generator.many(usize::MAX / 2, &options);
    assert!(matches!(result, Err(Error::Configuration(_))));
}

#[test]
fn passgen_generate_multiple_zero() -> Result<()> {
    let passwords = PasswordGenerator::new()
        .generate_multiple(0, &GenerationOptions::default())?;
    assert!(passwords.is_empty());
    Ok(())
}

#[test]
fn passgen_many_with_entropy() -> Result<()> {
    let options = GenerationOptions::new_ascii_printable(32);
    let results = seeded(9).many(3, &options)?;
    assert_eq!(3, results.len());
    for result in results {
        assert_eq!(32, result.password.expose_secret().len());
        assert!(result.entropy.guesses_log10() > 10.0);
    }
    Ok(())
}
