//! Inconsistency findings produced by the rule engine
//!
//! A finding never holds a reference to the analysed document: it only carries
//! paragraph ordinals and bounded excerpts, so it can be serialized and shipped
//! to report renderers on its own.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

/// One variant per inconsistency rule, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FindingKind {
    // General rules
    DoubtVersusCertainty {
        doubt: usize,
        certainty: usize,
    },
    AlternativesNotExcludedVersusSoleExplanation {
        not_excluded: usize,
        sole_explanation: usize,
    },
    SimpleSuspicionReference,
    SuspicionStandardTension {
        simple: Vec<usize>,
        grave: Vec<usize>,
    },

    // Plurality and convergence of indicia
    NoIndiciumReference,
    SingleWeakIndicium,
    PluralityWithoutConvergence {
        indicia: usize,
    },

    // Internal consistency of an indicium
    ContradictoryEvaluationSameParagraph,
    ContradictoryEvaluationAcrossParagraphs {
        weak: usize,
        strong: usize,
    },

    // External consistency between indicia
    ExplicitContradictionBetweenIndicia,
    UnconnectedIndicia {
        indicia: usize,
    },

    // Typical logical leaps
    PresenceToKnowledgeLeap,
    RankToAuthorshipLeap,
    CategoricalConclusionWithoutEvidence,

    // Misuse of testimony
    TestimonyAsStrongIndicium,
    TestimonyToAuthorshipLeap,
    SingleTestimonialIndiciumAsStrongProof,

    // Incomplete inferential chain
    ConclusionWithoutIndiciarySupport,
    CausalClaimWithoutLink,
    CoordinationWithoutSupport,
    KnowledgeWithoutSupport,

    // Assessment contrary to the evidence
    AssessmentContraryToEvidence,

    // Alternative hypotheses
    AlternativesAcknowledgedButSoleExplanation,
    AlternativesNotDiscardedButSoleConclusion,
    AlternativesMentionedWithoutAnalysis,
    UnjustifiedDismissalOfAlternative,
    SoleConclusionWithoutAlternatives,

    // Experience maxims and sound judgment
    AbstractExperienceMaxim,
    UnsupportedEmpiricalGeneralization,
    StereotypedMaxim {
        phrase: String,
    },
}

impl FindingKind {
    /// Stable title shown by report renderers
    pub fn label(&self) -> &'static str {
        match self {
            Self::DoubtVersusCertainty { .. } => "Contradicción duda vs certeza",
            Self::AlternativesNotExcludedVersusSoleExplanation { .. } => {
                "Incongruencia en hipótesis alternativas"
            }
            Self::SimpleSuspicionReference => "Referencia a 'sospecha simple' o equivalente",
            Self::SuspicionStandardTension { .. } => {
                "Tensión entre 'sospecha simple' y 'sospecha grave'"
            }
            Self::NoIndiciumReference => {
                "Ausencia de referencia explícita a indicios o hechos indiciarios"
            }
            Self::SingleWeakIndicium => "Indicio único sin singular fuerza acreditativa",
            Self::PluralityWithoutConvergence { .. } => {
                "Pluralidad de indicios sin explicación de convergencia/interrelación"
            }
            Self::ContradictoryEvaluationSameParagraph => {
                "Valoración interna contradictoria del indicio (mismo párrafo)"
            }
            Self::ContradictoryEvaluationAcrossParagraphs { .. } => {
                "Evaluación contradictoria del indicio (párrafos distintos)"
            }
            Self::ExplicitContradictionBetweenIndicia => "Contradicción explícita entre indicios",
            Self::UnconnectedIndicia { .. } => {
                "Falta de conexión entre indicios (consistencia externa)"
            }
            Self::PresenceToKnowledgeLeap => "Salto presencia física → conocimiento/participación",
            Self::RankToAuthorshipLeap => "Salto de cargo/jerarquía → autoría/responsabilidad penal",
            Self::CategoricalConclusionWithoutEvidence => {
                "Conclusión categórica sin referencia explícita a prueba/indicios"
            }
            Self::TestimonyAsStrongIndicium => "Uso indebido de testimonial como indicio fuerte",
            Self::TestimonyToAuthorshipLeap => "Salto testimonial → autoría/responsabilidad",
            Self::SingleTestimonialIndiciumAsStrongProof => {
                "Indicio único testimonial tratado como prueba fuerte"
            }
            Self::ConclusionWithoutIndiciarySupport => "Conclusión sin sustento indiciario previo",
            Self::CausalClaimWithoutLink => {
                "Afirmación causal sin explicación del vínculo (salto lógico)"
            }
            Self::CoordinationWithoutSupport => {
                "Afirmación de coordinación/autoría sin sustento indiciario"
            }
            Self::KnowledgeWithoutSupport => "Afirmación de conocimiento sin sustento probatorio",
            Self::AssessmentContraryToEvidence => {
                "Valoración contraria al contenido expreso del medio probatorio (mismo párrafo)"
            }
            Self::AlternativesAcknowledgedButSoleExplanation => {
                "Incongruencia: reconoce alternativas pero afirma única explicación"
            }
            Self::AlternativesNotDiscardedButSoleConclusion => {
                "No se descartan alternativas pero se afirma conclusión única"
            }
            Self::AlternativesMentionedWithoutAnalysis => {
                "Mención de hipótesis alternativas sin análisis"
            }
            Self::UnjustifiedDismissalOfAlternative => {
                "Descarte injustificado de hipótesis alternativa"
            }
            Self::SoleConclusionWithoutAlternatives => {
                "Conclusión única sin contrastar hipótesis alternativas"
            }
            Self::AbstractExperienceMaxim => {
                "Invocación abstracta de máximas de experiencia/sana crítica sin explicación"
            }
            Self::UnsupportedEmpiricalGeneralization => {
                "Generalización empírica sin sustento probatorio"
            }
            Self::StereotypedMaxim { .. } => {
                "Uso de máximas de experiencia estereotipadas/prejuiciosas"
            }
        }
    }

    /// Fixed explanation attached to every finding of this kind
    pub fn description(&self) -> &'static str {
        match self {
            Self::DoubtVersusCertainty { .. } => {
                "En un párrafo se afirma insuficiencia probatoria y en otro certeza plena, \
                 sin justificar la transición."
            }
            Self::AlternativesNotExcludedVersusSoleExplanation { .. } => {
                "Se afirma que no se descartan hipótesis alternativas, \
                 pero a la vez se sostiene que existe una única explicación."
            }
            Self::SimpleSuspicionReference => {
                "Se menciona 'sospecha simple' o equivalente; debe verificarse su compatibilidad \
                 con el estándar exigido en la resolución (p. ej., prisión preventiva)."
            }
            Self::SuspicionStandardTension { .. } => {
                "En distintos párrafos se menciona tanto 'sospecha simple' \
                 como 'sospecha grave', lo que exige clarificación del estándar aplicado."
            }
            Self::NoIndiciumReference => {
                "No se identifican menciones a indicios o hechos indiciarios, pese a tratarse \
                 de una resolución que pretende utilizar razonamiento indiciario."
            }
            Self::SingleWeakIndicium => {
                "El único indicio identificado proviene de fuente testimonial débil y \
                 se presenta como suficiente, vulnerando el método indiciario."
            }
            Self::PluralityWithoutConvergence { .. } => {
                "Existen varios indicios pero sin valoración conjunta o convergente."
            }
            Self::ContradictoryEvaluationSameParagraph => {
                "En un mismo párrafo se califica un indicio como débil y fuerte a la vez."
            }
            Self::ContradictoryEvaluationAcrossParagraphs { .. } => {
                "En un párrafo se describe un indicio como débil y en otro como fuerte o concluyente."
            }
            Self::ExplicitContradictionBetweenIndicia => {
                "Se explicita incompatibilidad entre indicios o hechos indiciarios."
            }
            Self::UnconnectedIndicia { .. } => {
                "Los indicios no aparecen conectados ni articulados entre sí."
            }
            Self::PresenceToKnowledgeLeap => {
                "Se infiere conocimiento o participación solo desde la presencia física."
            }
            Self::RankToAuthorshipLeap => {
                "Se deduce autoría o responsabilidad penal solo por el cargo."
            }
            Self::CategoricalConclusionWithoutEvidence => {
                "Se formulan conclusiones categóricas sin mencionar pruebas o indicios de soporte."
            }
            Self::TestimonyAsStrongIndicium => {
                "Una fuente testimonial es presentada como prueba concluyente o contundente."
            }
            Self::TestimonyToAuthorshipLeap => {
                "Una declaración testimonial se utiliza para afirmar participación o autoría \
                 sin puente indiciario objetivo."
            }
            Self::SingleTestimonialIndiciumAsStrongProof => {
                "El único indicio, de fuente testimonial, es tratado como prueba contundente."
            }
            Self::ConclusionWithoutIndiciarySupport => {
                "Se formula una conclusión fuerte sin integrar pruebas o indicios en el propio razonamiento."
            }
            Self::CausalClaimWithoutLink => {
                "Se afirma que algo 'demuestra' o 'evidencia' un hecho sin explicitar \
                 el vínculo entre los hechos y la conclusión."
            }
            Self::CoordinationWithoutSupport => {
                "Se afirma coordinación, dirección u organización sin integrar indicios concretos."
            }
            Self::KnowledgeWithoutSupport => {
                "Se afirma que el imputado 'sabía' o 'debía conocer' sin identificar el indicio que lo acredita."
            }
            Self::AssessmentContraryToEvidence => {
                "Se presenta un medio probatorio como demostrativo cuando el propio texto \
                 reconoce que su contenido es negativo o dubitativo."
            }
            Self::AlternativesAcknowledgedButSoleExplanation => {
                "Se reconocen hipótesis alternativas pero se mantiene una 'única explicación' como definitiva."
            }
            Self::AlternativesNotDiscardedButSoleConclusion => {
                "Se admite que no se descartan otras hipótesis y aun así se afirma una única conclusión."
            }
            Self::AlternativesMentionedWithoutAnalysis => {
                "Se mencionan explicaciones alternativas sin analizarlas ni contrastarlas."
            }
            Self::UnjustifiedDismissalOfAlternative => {
                "Se descarta una versión alternativa con fórmulas vacías ('no es creíble', etc.) \
                 sin justificación probatoria."
            }
            Self::SoleConclusionWithoutAlternatives => {
                "Se sostiene una 'única explicación' sin referencia a posibles hipótesis alternativas."
            }
            Self::AbstractExperienceMaxim => {
                "Se invocan genéricamente máximas de experiencia o sana crítica sin explicarlas \
                 ni vincularlas con datos empíricos ni pruebas."
            }
            Self::UnsupportedEmpiricalGeneralization => {
                "Se usan fórmulas como 'lo normal es que', 'es de experiencia común que', \
                 sin apoyo en datos empíricos o pruebas específicas."
            }
            Self::StereotypedMaxim { .. } => {
                "Se utilizan estereotipos ('quien nada debe nada teme', etc.) como si fueran \
                 verdaderas máximas de experiencia."
            }
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::DoubtVersusCertainty { .. }
            | Self::AlternativesNotExcludedVersusSoleExplanation { .. }
            | Self::ContradictoryEvaluationSameParagraph
            | Self::ContradictoryEvaluationAcrossParagraphs { .. }
            | Self::ExplicitContradictionBetweenIndicia
            | Self::AssessmentContraryToEvidence
            | Self::AlternativesAcknowledgedButSoleExplanation
            | Self::AlternativesNotDiscardedButSoleConclusion => Severity::Critical,

            Self::SimpleSuspicionReference | Self::NoIndiciumReference => Severity::Info,

            _ => Severity::Warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub severity: Severity,
    pub paragraphs: Vec<usize>, // 1-based ordinals, in the order the rule relates them
    pub detail: String,
    pub excerpts: Vec<String>, // One per paragraph, at most 280 characters each
}

impl Finding {
    /// Build a finding whose detail is the fixed description of its kind
    pub fn new(kind: FindingKind, paragraphs: Vec<usize>, excerpts: Vec<String>) -> Self {
        Self {
            severity: kind.severity(),
            detail: kind.description().to_string(),
            kind,
            paragraphs,
            excerpts,
        }
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}
