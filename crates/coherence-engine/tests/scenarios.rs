//! End-to-end scenarios over whole decision texts

use coherence_engine::{CoherenceEngine, ScoringProfile};
use pretty_assertions::assert_eq;
use shared_types::{Brake, CriterionId, DecisionDocument, FindingKind};

fn findings_labelled<'a>(
    findings: &'a [shared_types::Finding],
    label: &str,
) -> Vec<&'a shared_types::Finding> {
    findings.iter().filter(|f| f.label() == label).collect()
}

#[test]
fn single_witness_with_doubt_and_certainty() {
    let text = "El testigo declaró haber visto al acusado.\n\n\
                No se ha acreditado la hora del hecho.\n\n\
                Ha quedado acreditado que el acusado estuvo allí.";
    let evaluation = CoherenceEngine::new().evaluate(text);

    assert_eq!(evaluation.result.score(CriterionId::C1), Some(40.0));

    let contradictions = findings_labelled(&evaluation.findings, "Contradicción duda vs certeza");
    assert_eq!(contradictions.len(), 1);
    assert_eq!(contradictions[0].paragraphs, vec![2, 3]);
    assert_eq!(
        contradictions[0].kind,
        FindingKind::DoubtVersusCertainty {
            doubt: 2,
            certainty: 3
        }
    );
}

#[test]
fn four_evidentiary_types() {
    let text = "Declaró el testigo.\n\nSe practicó pericia.\n\nObra un documento.\n\nSe exhibió un video.";
    let result = CoherenceEngine::new().score(text);
    assert_eq!(result.score(CriterionId::C1), Some(90.0));
}

#[test]
fn alternative_mentioned_but_not_analysed() {
    let text = "Se dicta sentencia.\n\nLa defensa planteó una hipótesis alternativa sobre la autoría.";
    let evaluation = CoherenceEngine::new().evaluate(text);

    assert_eq!(evaluation.result.score(CriterionId::C4), Some(40.0));

    let unanalysed = findings_labelled(
        &evaluation.findings,
        "Mención de hipótesis alternativas sin análisis",
    );
    assert_eq!(unanalysed.len(), 1);
    assert_eq!(unanalysed[0].paragraphs, vec![2]);
}

#[test]
fn no_independent_corroboration() {
    let text = "La víctima relató los hechos con detalle.";
    let result = CoherenceEngine::new().score(text);

    assert_eq!(result.score(CriterionId::C13), Some(10.0));
    assert!(result.has_brake(Brake::NoIndependentCorroboration));
    assert_eq!(
        result.brakes[&Brake::NoIndependentCorroboration],
        Brake::NoIndependentCorroboration.detail()
    );
}

#[test]
fn empty_input_follows_zero_signal_branches() {
    for text in ["", "   \n\n\t  "] {
        let evaluation = CoherenceEngine::new().evaluate(text);

        assert_eq!(evaluation.paragraph_count, 0);
        assert!(evaluation.findings.is_empty());
        assert_eq!(evaluation.result.score(CriterionId::C1), Some(10.0));
        assert_eq!(evaluation.result.score(CriterionId::C3), Some(30.0));
        assert_eq!(evaluation.result.score(CriterionId::C7), Some(30.0));
    }
}

#[test]
fn pairing_rules_are_capped() {
    let doubts = "No se ha probado el hecho.\n\n".repeat(5);
    let certainties = "Ha quedado acreditado el hecho.\n\n".repeat(5);
    let evaluation = CoherenceEngine::new().evaluate(&format!("{}{}", doubts, certainties));

    let pairs = findings_labelled(&evaluation.findings, "Contradicción duda vs certeza");
    assert_eq!(pairs.len(), 3);
    let ordinals: Vec<_> = pairs.iter().map(|f| f.paragraphs.clone()).collect();
    assert_eq!(ordinals, vec![vec![1, 6], vec![1, 7], vec![1, 8]]);
}

#[test]
fn report_serializes_for_renderers() {
    let document = DecisionDocument::new(
        "exp-0042",
        "pasted",
        "Quien nada debe nada teme.\n\nPor tanto, el acusado es culpable.",
    );
    let report = CoherenceEngine::new().check_document(&document);
    let json: serde_json::Value = serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();

    assert_eq!(json["document_id"], "exp-0042");
    assert_eq!(json["paragraph_count"], 2);
    assert!(json["result"]["brakes"]["Sin corroboración independiente"].is_string());
    assert!(json["result"]["criteria"]["C13"].is_number());
    assert!(json["findings"]
        .as_array()
        .unwrap()
        .iter()
        .any(|f| f["kind"]["STEREOTYPED_MAXIM"]["phrase"] == "Quien nada debe nada teme"));
}

#[test]
fn shipped_profile_loads_from_disk() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/profiles/ici_v7.toml");
    let profile = ScoringProfile::load(path).unwrap();
    let engine = CoherenceEngine::with_profile(profile);

    assert_eq!(
        engine.score("Texto").raw_index,
        CoherenceEngine::new().score("Texto").raw_index
    );
}
