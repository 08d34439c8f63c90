//! Triagem de mitomania (pseudologia fantástica), in Portuguese.

use super::report::{bullets, numbered, Checkpoint, Report};
use super::types::{Band, Instrument, Locale, Question, StartGate, Subscale, Tone};
use crate::scoring::ScoreSheet;

static SUBSCALES: [Subscale; 8] = [
    Subscale {
        key: "mentiras_compulsivas",
        label: "Mentiras Compulsivas",
        description: "Tendência incontrolável de mentir mesmo sem necessidade",
        questions: &[
            Question::direct("Frequentemente minto mesmo quando a verdade seria mais fácil ou melhor"),
            Question::direct("Sinto um impulso forte para mentir, mesmo em situações sem importância"),
            Question::direct("Tenho dificuldade para parar de mentir uma vez que comecei"),
            Question::direct("Minto automaticamente, sem pensar conscientemente nisso"),
            Question::reverse("Raramente sinto necessidade de inventar ou exagerar histórias"),
            Question::direct("Minto várias vezes ao dia, mesmo sobre coisas pequenas"),
            Question::reverse("Sempre falo a verdade, independentemente das consequências"),
        ],
    },
    Subscale {
        key: "fantasias_elaboradas",
        label: "Fantasias Elaboradas",
        description: "Criação de histórias complexas e detalhadas irreais",
        questions: &[
            Question::direct("Crio histórias detalhadas e complexas sobre minha vida que não são verdadeiras"),
            Question::direct("Invento experiências dramáticas ou extraordinárias que nunca aconteceram"),
            Question::direct("Fabrico detalhes elaborados para tornar minhas histórias mais interessantes"),
            Question::direct("Conto a mesma história de formas diferentes para pessoas diferentes"),
            Question::reverse("Mantenho minhas histórias simples e baseadas na realidade"),
            Question::direct("Crio personagens ou situações fictícias e as apresento como reais"),
            Question::reverse("Prefiro contar apenas fatos que realmente aconteceram"),
        ],
    },
    Subscale {
        key: "busca_atencao",
        label: "Busca de Atenção",
        description: "Necessidade excessiva de ser notado e admirado",
        questions: &[
            Question::direct("Frequentemente invento ou exagero histórias para impressionar outros"),
            Question::direct("Sinto necessidade de ser o centro das atenções em conversas"),
            Question::direct("Conto histórias dramáticas sobre mim mesmo para obter simpatia ou admiração"),
            Question::direct("Fico desconfortável quando não sou o foco da atenção"),
            Question::reverse("Estou satisfeito em ouvir outros falarem sobre suas experiências"),
            Question::direct("Exagero meus problemas ou sucessos para obter mais atenção"),
            Question::reverse("Raramente sinto necessidade de ser o centro das atenções"),
        ],
    },
    Subscale {
        key: "manipulacao_interpessoal",
        label: "Manipulação Interpessoal",
        description: "Uso de mentiras para controlar ou influenciar outros",
        questions: &[
            Question::direct("Uso mentiras para conseguir o que quero de outras pessoas"),
            Question::direct("Minto para evitar responsabilidades ou consequências"),
            Question::direct("Crio histórias para fazer outros sentirem pena de mim"),
            Question::direct("Uso informações falsas para influenciar decisões de outros"),
            Question::reverse("Sempre sou direto e honesto em minhas comunicações"),
            Question::direct("Minto para criar conflitos entre outras pessoas"),
            Question::reverse("Nunca uso mentiras para obter vantagens pessoais"),
        ],
    },
    Subscale {
        key: "confusao_realidade",
        label: "Confusão com a Realidade",
        description: "Dificuldade em distinguir entre verdade e fantasia",
        questions: &[
            Question::direct("Às vezes tenho dificuldade para lembrar se algo realmente aconteceu ou se inventei"),
            Question::direct("Minhas fantasias às vezes parecem tão reais quanto memórias verdadeiras"),
            Question::direct("Começo a acreditar em minhas próprias mentiras depois de contá-las várias vezes"),
            Question::direct("Tenho momentos em que não tenho certeza do que é real"),
            Question::reverse("Sempre tenho clareza sobre o que é verdade e o que é fantasia"),
            Question::direct("Fico confuso sobre quais versões de uma história são verdadeiras"),
            Question::reverse("Minha memória dos eventos é sempre precisa e confiável"),
        ],
    },
    Subscale {
        key: "necessidade_admiracao",
        label: "Necessidade de Admiração",
        description: "Desejo intenso de ser visto como especial ou importante",
        questions: &[
            Question::direct("Invento conquistas ou habilidades para impressionar outros"),
            Question::direct("Exagero meu status social, profissional ou financeiro"),
            Question::direct("Crio histórias sobre pessoas famosas ou importantes que \"conheço\""),
            Question::direct("Minto sobre minha educação, formação ou experiência profissional"),
            Question::reverse("Estou confortável sendo uma pessoa comum sem histórias especiais"),
            Question::direct("Fabrico histórias sobre viagens ou experiências únicas que nunca tive"),
            Question::reverse("Não sinto necessidade de impressionar outros com histórias elaboradas"),
        ],
    },
    Subscale {
        key: "impacto_relacionamentos",
        label: "Impacto nos Relacionamentos",
        description: "Consequências das mentiras nos relacionamentos",
        questions: &[
            Question::direct("Minhas mentiras já causaram problemas sérios em relacionamentos"),
            Question::direct("Perdi amigos ou parceiros por causa de minhas mentiras"),
            Question::direct("Pessoas próximas me confrontaram sobre inconsistências em minhas histórias"),
            Question::direct("Sinto que preciso lembrar de várias versões diferentes da \"verdade\""),
            Question::reverse("Meus relacionamentos são baseados em honestidade e confiança mútua"),
            Question::direct("Tenho dificuldade para manter relacionamentos próximos e duradouros"),
            Question::reverse("As pessoas me veem como alguém confiável e honesto"),
        ],
    },
    Subscale {
        key: "comportamento_teatral",
        label: "Comportamento Teatral",
        description: "Tendência a dramatizar e exagerar situações",
        questions: &[
            Question::direct("Tendo a dramatizar situações e exagerar emoções ao contar histórias"),
            Question::direct("Uso gestos e expressões dramáticas para tornar minhas histórias mais convincentes"),
            Question::direct("Adapto meu comportamento e personalidade dependendo da audiência"),
            Question::direct("Sinto que estou \"interpretando\" um papel em muitas situações sociais"),
            Question::reverse("Mantenho a mesma personalidade em todas as situações"),
            Question::direct("Exagero expressões faciais e tom de voz para efeito dramático"),
            Question::reverse("Prefiro uma comunicação direta e sem dramatização"),
        ],
    },
];

static WEIGHTS: [(&str, f64); 8] = [
    ("mentiras_compulsivas", 0.30),
    ("fantasias_elaboradas", 0.20),
    ("busca_atencao", 0.15),
    ("manipulacao_interpessoal", 0.15),
    ("confusao_realidade", 0.10),
    ("necessidade_admiracao", 0.05),
    ("impacto_relacionamentos", 0.03),
    ("comportamento_teatral", 0.02),
];

static OVERALL_BANDS: [Band; 4] = [
    Band {
        floor: 65.0,
        label: "RISCO CRÍTICO",
        summary: "Risco crítico - tratamento urgente. Indicadores severos de mitomania. Tratamento intensivo necessário.",
        tone: Tone::Alert,
    },
    Band {
        floor: 45.0,
        label: "RISCO ALTO",
        summary: "Risco alto - intervenção recomendada. Padrões significativos de mitomania. Busque ajuda profissional.",
        tone: Tone::Alert,
    },
    Band {
        floor: 25.0,
        label: "RISCO MODERADO",
        summary: "Risco moderado - atenção recomendada. Alguns padrões preocupantes. Considere autoavaliação e possível ajuda.",
        tone: Tone::Caution,
    },
    Band {
        floor: 0.0,
        label: "BAIXO RISCO",
        summary: "Baixo risco para mitomania. Padrões normais de comunicação. Continue praticando honestidade.",
        tone: Tone::Good,
    },
];

static SUBSCALE_BANDS: [Band; 4] = [
    Band {
        floor: 80.0,
        label: "CRÍTICO",
        summary: "",
        tone: Tone::Alert,
    },
    Band {
        floor: 65.0,
        label: "ALTO",
        summary: "",
        tone: Tone::Alert,
    },
    Band {
        floor: 45.0,
        label: "MODERADO",
        summary: "",
        tone: Tone::Caution,
    },
    Band {
        floor: 0.0,
        label: "BAIXO",
        summary: "",
        tone: Tone::Good,
    },
];

const FEEDBACK_HIGH: f64 = 70.0;
const FEEDBACK_MODERATE: f64 = 45.0;

pub static INSTRUMENT: Instrument = Instrument {
    key: "mythomania",
    title: "FERRAMENTA DE TRIAGEM PARA MITOMANIA (PSEUDOLOGIA FANTÁSTICA) - BRASIL",
    assessment_type: "Ferramenta de Triagem para Mitomania - Brasil",
    version: "1.0",
    locale: Locale::Pt,
    intro: &[
        "AVISOS IMPORTANTES:",
        "• Esta NÃO é uma ferramenta diagnóstica para Mitomania",
        "• Apenas profissionais licenciados podem diagnosticar transtornos",
        "• Mentir ocasionalmente é comportamento humano normal",
        "• Seja honesto ao responder para resultados precisos",
        "• Resultados devem ser discutidos com profissional de saúde",
        "",
        "SOBRE MITOMANIA:",
        "• Também conhecida como Pseudologia Fantástica",
        "• Caracterizada por mentiras compulsivas e elaboradas",
        "• Diferente de mentiras ocasionais ou socialmente aceitáveis",
        "• Tratamento principal é psicoterapia, não medicamentos",
        "",
        "RECURSOS DE APOIO - BRASIL:",
        "• Centro de Valorização da Vida (CVV): 188",
        "• Conselho Federal de Psicologia: encontre psicólogos",
        "• CAPS (Centro de Atenção Psicossocial): atendimento público",
    ],
    scale: &[
        "1 = Nunca/Discordo Totalmente",
        "2 = Raramente/Discordo",
        "3 = Às vezes/Neutro",
        "4 = Frequentemente/Concordo",
        "5 = Sempre/Concordo Totalmente",
    ],
    start_gate: Some(StartGate {
        notes: &[
            "Antes de começar:",
            "• Esta triagem leva 15-20 minutos",
            "• A honestidade é ESSENCIAL para resultados úteis",
            "• Mitomania é tratável com psicoterapia adequada",
            "• Reconhecer padrões é o primeiro passo para mudança",
        ],
        question: "Pronto para começar com honestidade?",
        cancel_message: "Triagem cancelada. Considere retornar quando estiver pronto para ser honesto.",
    }),
    subscales: &SUBSCALES,
    weights: Some(&WEIGHTS),
    overall_key: "overall_mythomania",
    overall_label: "Pontuação geral de mitomania",
    overall_bands: &OVERALL_BANDS,
    subscale_bands: &SUBSCALE_BANDS,
    disclaimer: Some(
        "Esta é uma ferramenta de triagem, não um instrumento diagnóstico. Procure ajuda profissional para avaliação completa.",
    ),
    resources: &[
        ("conselho_federal_psicologia", "https://site.cfp.org.br"),
        ("cvv", "188"),
        ("caps_info", "Procure o CAPS da sua região"),
        ("clinicas_universitarias", "Universidades oferecem atendimento psicológico"),
    ],
    closing: &[
        "Lembre-se: Esta é uma ferramenta de triagem, não um diagnóstico.",
        "Mitomania é tratável com psicoterapia adequada e comprometimento.",
        "O primeiro passo para mudança é reconhecer padrões honestamente.",
        "Procure ajuda profissional se os resultados indicarem necessidade.",
    ],
    demo: &[
        ("mentiras_compulsivas", 75.0),
        ("fantasias_elaboradas", 68.0),
        ("busca_atencao", 82.0),
        ("manipulacao_interpessoal", 45.0),
        ("confusao_realidade", 55.0),
        ("necessidade_admiracao", 70.0),
        ("impacto_relacionamentos", 65.0),
        ("comportamento_teatral", 78.0),
    ],
    interpret,
    checkpoint: Some(immediate_feedback),
};

fn immediate_feedback(sheet: &ScoreSheet) -> Option<Checkpoint> {
    let overall = sheet.overall;
    let verdict: [&str; 3] = if overall > FEEDBACK_HIGH {
        [
            "PONTUAÇÃO ALTA DETECTADA",
            "Suas respostas sugerem padrões significativos consistentes com mitomania.",
            "Recomendamos fortemente consulta com psicólogo ou psiquiatra.",
        ]
    } else if overall > FEEDBACK_MODERATE {
        [
            "PONTUAÇÃO MODERADA",
            "Alguns padrões preocupantes identificados.",
            "Considere conversar com um profissional de saúde mental.",
        ]
    } else {
        [
            "PONTUAÇÃO BAIXA",
            "Não há indicadores significativos de mitomania.",
            "Continue praticando comunicação honesta e autêntica.",
        ]
    };

    let mut lines = vec!["FEEDBACK IMEDIATO".to_string()];
    lines.extend(verdict.iter().map(|line| line.to_string()));
    lines.push(format!("Sua pontuação: {:.1}/100", overall));
    lines.push("Lembre-se: Esta é apenas uma triagem, não um diagnóstico.".to_string());
    Some(Checkpoint::Notice { lines })
}

fn recommendations(overall: f64, top: &[&str]) -> Vec<String> {
    if overall < 25.0 {
        bullets(&[
            "Continue praticando comunicação honesta",
            "Desenvolva autoconhecimento e mindfulness",
            "Fortaleça relacionamentos autênticos",
            "Considere grupos de desenvolvimento pessoal",
            "Mantenha diário de reflexões diárias",
        ])
    } else if overall < 45.0 {
        vec![
            "• Consulte psicólogo especializado".to_string(),
            "• Inicie terapia cognitivo-comportamental".to_string(),
            format!("• Aborde área principal: {}", top.first().copied().unwrap_or_default()),
            "• Pratique técnicas de mindfulness".to_string(),
            "• Considere terapia de grupo".to_string(),
        ]
    } else if overall < 65.0 {
        let pair: Vec<&str> = top.iter().take(2).copied().collect();
        vec![
            "• URGENTE: Avaliação psicológica completa".to_string(),
            "• Terapia intensiva (2x por semana)".to_string(),
            format!("• Trabalhar: {}", pair.join(", ")),
            "• Envolver família no tratamento".to_string(),
            "• Monitoramento de progresso semanal".to_string(),
        ]
    } else {
        bullets(&[
            "Avaliação psiquiátrica IMEDIATA",
            "Tratamento intensivo multidisciplinar",
            "Envolvimento familiar obrigatório",
            "Monitoramento diário inicial",
        ])
    }
}

fn immediate_steps(overall: f64) -> Vec<String> {
    if overall >= 65.0 {
        numbered(&[
            "Buscar avaliação psiquiátrica/psicológica URGENTE",
            "Iniciar terapia cognitivo-comportamental intensiva",
            "Envolver família/amigos próximos no tratamento",
            "Considerar afastamento de situações de risco",
            "Monitoramento profissional frequente",
        ])
    } else if overall >= 45.0 {
        numbered(&[
            "Agendar consulta com psicólogo especializado",
            "Iniciar diário de mentiras e gatilhos",
            "Praticar técnicas de mindfulness",
            "Considerar terapia de grupo",
            "Informar pessoas próximas sobre o processo",
        ])
    } else {
        numbered(&[
            "Continuar automonitoramento",
            "Praticar comunicação honesta",
            "Técnicas de mindfulness preventivas",
            "Fortalecer relacionamentos autênticos",
            "Considerar coaching de desenvolvimento pessoal",
        ])
    }
}

fn interpret(instrument: &'static Instrument, sheet: &ScoreSheet) -> Report {
    let mut report = Report::new("ANÁLISE DETALHADA DA TRIAGEM DE MITOMANIA");
    let band = instrument.overall_band(sheet.overall);

    report.section(
        format!("PONTUAÇÃO GERAL DE MITOMANIA: {:.1}/100", sheet.overall),
        [
            format!("NÍVEL: {}", band.label),
            format!("INTERPRETAÇÃO: {}", band.summary),
        ],
    );

    let ranked = sheet.ranked();
    let mut analysis = Vec::new();
    for behaviour in &ranked {
        analysis.push(format!(
            "• {}: {:.1} ({})",
            behaviour.label,
            behaviour.score,
            instrument.subscale_band(behaviour.score).label
        ));
        analysis.push(format!("  {}", instrument.description(behaviour.key)));
    }
    report.section("ANÁLISE POR COMPORTAMENTO", analysis);

    let top: Vec<&str> = ranked.iter().take(3).map(|s| s.label).collect();
    report.section(
        "PRINCIPAIS PREOCUPAÇÕES",
        ranked
            .iter()
            .take(3)
            .enumerate()
            .map(|(i, s)| format!("{}. {}: {:.0}", i + 1, s.label, s.score)),
    );

    report.section("RECOMENDAÇÕES", recommendations(sheet.overall, &top));
    report.section("RECOMENDAÇÕES IMEDIATAS", immediate_steps(sheet.overall));
    report.section(
        "RECURSOS EDUCACIONAIS",
        bullets(&[
            "Livros sobre comunicação honesta e autenticidade",
            "Apps de mindfulness (Headspace, Calm)",
            "Grupos de apoio online",
            "Literatura sobre terapia cognitivo-comportamental",
        ]),
    );
    report.section(
        "IMPORTANTE",
        bullets(&[
            "Mitomania é um padrão comportamental tratável",
            "O tratamento principal é psicoterapia",
            "Honestidade no tratamento é essencial",
            "Mudança requer tempo e comprometimento",
            "Apoio social é fundamental para recuperação",
        ]),
    );

    report
}
