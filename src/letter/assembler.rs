//! Letter template expansion.
//!
//! Paragraph boilerplate is Portuguese legal-notice text; a termination
//! letter is only useful in the language of the contract. Paragraph kinds
//! and inclusion rules are what the rest of the system works with.

use chrono::NaiveDate;

use crate::models::{LetterDocument, LetterParagraph, LetterRequest, LetterType, ParagraphKind};

/// Notice days assumed when notice is given without a period.
pub const DEFAULT_NOTICE_DAYS: u32 = 30;

/// Formats a date the way the letters display it (dd/mm/yyyy).
pub fn format_letter_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Assembles a termination letter from the request.
///
/// The paragraph order is fixed: date, addressee, subject, salutation,
/// body, optional notice, reason, courtesy, optional settlement request,
/// closing, signature. The notice paragraph is included only for
/// employer-initiated letters with notice given; the settlement paragraph
/// only when requested.
///
/// # Example
///
/// ```
/// use severance_engine::letter::assemble_letter;
/// use severance_engine::models::{LetterRequest, LetterType, ParagraphKind};
/// use chrono::NaiveDate;
///
/// let request = LetterRequest {
///     name: "Maria Santos".to_string(),
///     role: "Técnica de Vendas".to_string(),
///     company: "Empresa Exemplo Lda.".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2019, 4, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
///     letter_type: LetterType::WorkerInitiated,
///     notice_given: false,
///     notice_days: None,
///     reason: "Motivos pessoais".to_string(),
///     request_final_settlement: true,
/// };
/// let today = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
/// let document = assemble_letter(&request, today);
///
/// assert!(document.paragraph(ParagraphKind::Notice).is_none());
/// assert!(document.paragraph(ParagraphKind::Settlement).is_some());
/// ```
pub fn assemble_letter(request: &LetterRequest, today: NaiveDate) -> LetterDocument {
    let mut paragraphs = Vec::with_capacity(11);

    paragraphs.push(LetterParagraph {
        kind: ParagraphKind::DateLine,
        text: format_letter_date(today),
    });
    paragraphs.push(LetterParagraph {
        kind: ParagraphKind::Addressee,
        text: format!("À atenção de {}", request.company),
    });
    paragraphs.push(LetterParagraph {
        kind: ParagraphKind::Subject,
        text: "Assunto: Rescisão do Contrato de Trabalho".to_string(),
    });
    paragraphs.push(LetterParagraph {
        kind: ParagraphKind::Salutation,
        text: "Exmos. Senhores,".to_string(),
    });

    let body = match request.letter_type {
        LetterType::EmployerInitiated => format!(
            "Vimos por este meio comunicar a rescisão do contrato de trabalho \
             do(a) Sr(a). {}, exercendo as funções de {}, iniciado em {}, \
             com efeitos a partir de {}.",
            request.name,
            request.role,
            format_letter_date(request.start_date),
            format_letter_date(request.end_date),
        ),
        LetterType::WorkerInitiated => format!(
            "Venho por este meio comunicar a minha decisão de rescindir o \
             contrato de trabalho que mantenho com a vossa empresa, exercendo \
             as funções de {}, iniciado em {}, com efeitos a partir de {}.",
            request.role,
            format_letter_date(request.start_date),
            format_letter_date(request.end_date),
        ),
    };
    paragraphs.push(LetterParagraph {
        kind: ParagraphKind::Body,
        text: body,
    });

    if request.letter_type == LetterType::EmployerInitiated && request.notice_given {
        let days = request.notice_days.unwrap_or(DEFAULT_NOTICE_DAYS);
        paragraphs.push(LetterParagraph {
            kind: ParagraphKind::Notice,
            text: format!(
                "O presente aviso é dado com a antecedência de {} dias, \
                 conforme previsto na legislação laboral.",
                days
            ),
        });
    }

    paragraphs.push(LetterParagraph {
        kind: ParagraphKind::Reason,
        text: format!("Motivo: {}", request.reason),
    });
    paragraphs.push(LetterParagraph {
        kind: ParagraphKind::Courtesy,
        text: "Agradeço a oportunidade e colaboração durante o período em que \
               estive ao serviço da empresa."
            .to_string(),
    });

    if request.request_final_settlement {
        paragraphs.push(LetterParagraph {
            kind: ParagraphKind::Settlement,
            text: "Solicito ainda que seja efetuado o apuramento das contas \
                   finais e o pagamento de todos os valores a que tenho \
                   direito, nomeadamente férias vencidas e não gozadas, \
                   proporcionais, subsídios e demais créditos laborais, \
                   dentro do prazo legal."
                .to_string(),
        });
    }

    paragraphs.push(LetterParagraph {
        kind: ParagraphKind::Closing,
        text: "Com os melhores cumprimentos,".to_string(),
    });
    paragraphs.push(LetterParagraph {
        kind: ParagraphKind::Signature,
        text: request.name.clone(),
    });

    LetterDocument {
        generated_on: today,
        paragraphs,
    }
}
