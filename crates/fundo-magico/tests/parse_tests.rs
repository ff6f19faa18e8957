//! End-to-end tests for parsing and rendering.

use fundo_magico::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("fundo_magico=trace")
        .with_test_writer()
        .try_init();
}

fn solid(input: &str) -> String {
    match parse(input) {
        Ok(Background::Solid(color)) => color.into_string(),
        other => panic!("expected solid color for {input:?}, got {other:?}"),
    }
}

fn gradient(input: &str) -> String {
    match parse(input) {
        Ok(Background::Gradient(value)) => value.into_string(),
        other => panic!("expected gradient for {input:?}, got {other:?}"),
    }
}

#[test]
fn documented_examples() {
    init_tracing();

    assert_eq!(solid("vermelho"), "#ef4444");
    assert_eq!(gradient("azul e amarelo"), "linear-gradient(90deg, #3b82f6, #ffd900)");
    assert_eq!(
        gradient("radial vermelho, verde, azul 45 graus"),
        "radial-gradient(circle at center, #ef4444, #22c55e, #3b82f6)"
    );
    assert_eq!(parse("#zzz"), Err(ParseError::NoColors));
    assert_eq!(
        gradient("conic red, blue 30 graus"),
        "conic-gradient(from 30deg at center, red, blue)"
    );
}

#[test]
fn compound_names_beat_their_prefix() {
    assert_eq!(solid("azul escuro"), "#1e3a8a");
    assert_eq!(solid("AZUL   ESCURO"), "#1e3a8a");
    assert_ne!(solid("azul escuro"), solid("azul"));
    assert_eq!(
        gradient("cinza escuro, cinza claro"),
        "linear-gradient(90deg, #4b5563, #cfd6dc)"
    );
}

#[test]
fn one_recognizable_color_is_always_solid() {
    for (input, expected) in [
        ("preto", "#000000"),
        ("cor de laranja", "#ffa500"),
        ("fundo lilás", "#b18cff"),
        ("#abc", "#abc"),
        ("rgb(10,120,30)", "rgb(10,120,30)"),
        ("hsl(200, 50%, 40%)", "hsl(200, 50%, 40%)"),
        ("tomato", "tomato"),
        ("azul, dragão", "#3b82f6"),
    ] {
        assert_eq!(solid(input), expected, "input {input:?}");
    }
}

#[test]
fn gradients_keep_input_order() {
    let forward = gradient("preto, vermelho, amarelo, branco");
    assert_eq!(forward, "linear-gradient(90deg, #000000, #ef4444, #ffd900, #ffffff)");

    let backward = gradient("branco; amarelo / vermelho e preto");
    assert_eq!(backward, "linear-gradient(90deg, #ffffff, #ffd900, #ef4444, #000000)");
}

#[test]
fn mixed_literal_kinds() {
    assert_eq!(
        gradient("#0f0, rgb(10, 120, 30) e crimson"),
        "linear-gradient(90deg, #0f0, rgb(10, 120, 30), crimson)"
    );
}

#[test]
fn color_four_functions_keep_their_hue() {
    assert_eq!(
        gradient("oklch(70% 0.1 250deg) e azul"),
        "linear-gradient(90deg, oklch(70% 0.1 250deg), #3b82f6)"
    );
    assert_eq!(solid("lch(50% 30 90deg)"), "lch(50% 30 90deg)");
    assert_eq!(solid("hsl( 200deg 50% 40%)"), "hsl( 200deg 50% 40%)");
}

#[test]
fn modifiers_combine() {
    assert_eq!(
        gradient("cônico repetindo azul e verde 30 graus"),
        "repeating-conic-gradient(from 30deg at center, #3b82f6, #22c55e)"
    );
    assert_eq!(
        gradient("circular repetido roxo e rosa choque, preto"),
        "repeating-radial-gradient(circle at center, #9d7cff, #000000)"
    );
    assert_eq!(
        gradient("gradiente de azul e verde em 135deg"),
        "linear-gradient(135deg, #3b82f6, #22c55e)"
    );
}

#[test]
fn word_angle_wins_over_degree_angle() {
    assert_eq!(
        gradient("azul e verde 10deg 20 graus"),
        "linear-gradient(20deg, #3b82f6, #22c55e)"
    );
}

#[test]
fn pass_through_is_verbatim() {
    for input in [
        "linear-gradient(45deg, red, blue)",
        "radial-gradient(circle at 20% 30%, #fff 0%, #000 100%)",
        "repeating-conic-gradient(from 0deg at center, red 0deg 10deg, blue 10deg 20deg)",
        "linear-gradient(to right, rgba(0,0,0,.5), transparent), linear-gradient(red, blue)",
    ] {
        assert_eq!(gradient(input), input);
    }

    assert_eq!(parse("linear-gradient(45deg, red)"), Err(ParseError::InvalidGradient));
    assert_eq!(parse("radial-gradient(circle at center, red, blue"), Err(ParseError::InvalidGradient));
}

#[test]
fn failure_reasons() {
    assert_eq!(parse("").unwrap_err().to_string(), "Digite pelo menos uma cor.");
    assert_eq!(parse("   ").unwrap_err(), ParseError::EmptyInput);
    assert_eq!(parse("gradiente de para").unwrap_err(), ParseError::NoTokens);
    assert_eq!(
        parse("algo bonito").unwrap_err().to_string(),
        "Nenhuma cor reconhecida. Exemplos: '#0f0', 'rgb(10,120,30)', 'marrom'."
    );
}

#[test]
fn render_is_idempotent() {
    for input in ["vermelho", "azul e amarelo", "conic red, blue 30 graus"] {
        let background = parse(input).unwrap().into_literal();
        let first = render(&background);
        let second = render(&background);
        assert_eq!(first, second, "input {input:?}");
    }
}

#[test]
fn render_matches_outcome_kind() {
    let solid = render(&parse("verde").unwrap().into_literal());
    assert!(!solid.style.contains("bgSweep 8s"));

    let gradient = render(&parse("verde e azul").unwrap().into_literal());
    assert!(gradient.style.contains("bgSweep 8s ease-in-out infinite"));
    assert!(gradient.style.contains("background: linear-gradient(90deg, #22c55e, #3b82f6);"));
}

#[test]
fn parser_is_shareable_across_threads() {
    let parser = std::sync::Arc::new(BackgroundParser::default());

    let handles: Vec<_> = ["azul", "verde", "roxo"]
        .into_iter()
        .map(|name| {
            let parser = parser.clone();
            std::thread::spawn(move || parser.parse(name).map(|b| b.as_str().to_string()))
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap().unwrap()).collect();
    assert_eq!(results, ["#3b82f6", "#22c55e", "#9d7cff"]);
}
