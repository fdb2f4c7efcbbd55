//! Synthetic speech bodies for the document detail view.
//!
//! The demo dataset carries no real document texts. The detail view picks a
//! body from this fixed pool by document position, so the same document
//! always shows the same text.

/// A run of text within a paragraph, optionally highlighted as the passage
/// the score reacted to.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub text: &'static str,
    pub highlight: bool,
}

/// One placeholder speech: paragraphs of plain and highlighted segments.
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderText {
    pub paragraphs: &'static [&'static [Segment]],
}

/// Shown under every placeholder body.
pub const DISCLAIMER: &str = "Synthetischer Platzhaltertext — kein realer Parlamentsbeitrag.";

const fn plain(text: &'static str) -> Segment {
    Segment {
        text,
        highlight: false,
    }
}

const fn marked(text: &'static str) -> Segment {
    Segment {
        text,
        highlight: true,
    }
}

/// Picks the body for a document by its position in the MP's full document
/// list, cycling through the pool.
pub fn body_for_index(doc_index: usize) -> &'static PlaceholderText {
    &PLACEHOLDER_TEXTS[doc_index % PLACEHOLDER_TEXTS.len()]
}

pub static PLACEHOLDER_TEXTS: [PlaceholderText; 6] = [
    PlaceholderText {
        paragraphs: &[
            &[plain(
                "Herr Präsident, meine sehr verehrten Damen und Herren, die Frage, die wir heute \
                 diskutieren, betrifft die Grundlagen unseres Zusammenlebens. Es geht nicht um \
                 Parteipolitik, sondern um die Prinzipien, auf denen unser Grundgesetz aufgebaut ist.",
            )],
            &[
                plain("Wir müssen anerkennen, dass die "),
                marked(
                    "gegenwärtigen Herausforderungen eine klare Antwort des Rechtsstaats erfordern",
                ),
                plain(
                    ". Die Bürgerinnen und Bürger erwarten von uns, dass wir handeln — aber im \
                     Rahmen der Verfassung, nicht außerhalb.",
                ),
            ],
            &[plain(
                "Ich möchte darauf hinweisen, dass die vorgeschlagenen Maßnahmen sorgfältig gegen \
                 die Grundrechte abgewogen werden müssen. Eine Demokratie zeigt ihre Stärke nicht \
                 in der Beschränkung von Rechten, sondern in deren Verteidigung.",
            )],
        ],
    },
    PlaceholderText {
        paragraphs: &[
            &[
                plain(
                    "Sehr geehrte Frau Präsidentin, die aktuelle Debatte zeigt einmal mehr, wie \
                     wichtig es ist, dass wir sachlich und respektvoll miteinander umgehen. ",
                ),
                marked(
                    "Wer den politischen Gegner delegitimiert, schadet der Demokratie insgesamt.",
                ),
            ],
            &[plain(
                "Die Zahlen des Statistischen Bundesamtes belegen eindeutig, dass die Situation \
                 differenzierter ist, als manche hier im Hause behaupten. Ich bitte darum, bei den \
                 Fakten zu bleiben und nicht mit Ängsten zu spielen.",
            )],
            &[plain(
                "Unsere Fraktion wird dem Gesetzentwurf in der vorliegenden Form nicht zustimmen, \
                 weil er fundamentale rechtsstaatliche Prinzipien missachtet. Wir sind bereit, \
                 konstruktiv an einer Lösung mitzuarbeiten.",
            )],
        ],
    },
    PlaceholderText {
        paragraphs: &[
            &[
                plain("Meine Damen und Herren, "),
                marked(
                    "die Souveränität des deutschen Volkes wird durch die gegenwärtige Politik \
                     dieser Regierung systematisch untergraben",
                ),
                plain(
                    ". Wir brauchen eine grundlegende Kurskorrektur in der Migrationspolitik.",
                ),
            ],
            &[
                plain(
                    "Die Bürger dieses Landes haben ein Recht darauf zu erfahren, wer in unser Land \
                     kommt und welche Kosten damit verbunden sind. ",
                ),
                marked(
                    "Es ist nicht fremdenfeindlich, diese Fragen zu stellen — es ist demokratische \
                     Pflicht.",
                ),
            ],
            &[plain(
                "Wir fordern die Bundesregierung auf, die Kontrolle über die Grenzen \
                 wiederherzustellen und die Interessen der deutschen Steuerzahler an erste Stelle \
                 zu setzen. Das Volk hat gesprochen, und Sie ignorieren seinen Willen.",
            )],
        ],
    },
    PlaceholderText {
        paragraphs: &[
            &[plain(
                "Frau Präsidentin, Kolleginnen und Kollegen, der vorliegende Haushaltsentwurf \
                 spiegelt die Prioritäten dieser Koalition wider — und diese Prioritäten sind \
                 falsch gesetzt.",
            )],
            &[plain(
                "Während Milliarden für fragwürdige Projekte ausgegeben werden, fehlt es an \
                 Investitionen in Bildung, Infrastruktur und innere Sicherheit. Die Kommunen sind \
                 am Limit, und die Bundesregierung schaut zu.",
            )],
            &[
                plain(
                    "Ich fordere den Bundesfinanzminister auf, hier und heute zu erklären, wie er \
                     gedenkt, ",
                ),
                marked("die wachsende Ungleichheit in diesem Land zu bekämpfen"),
                plain(", anstatt sie durch seine Politik noch zu verschärfen."),
            ],
        ],
    },
    PlaceholderText {
        paragraphs: &[
            &[plain(
                "Herr Präsident, der Klimawandel ist die zentrale Herausforderung unserer Zeit. \
                 Die wissenschaftlichen Erkenntnisse sind eindeutig, und wir dürfen keine weitere \
                 Zeit verlieren.",
            )],
            &[plain(
                "Die Transformation unserer Wirtschaft hin zu Klimaneutralität ist nicht nur \
                 ökologisch notwendig, sondern auch ökonomisch sinnvoll. Jeder Euro, den wir heute \
                 in erneuerbare Energien investieren, spart morgen ein Vielfaches an Folgekosten.",
            )],
            &[
                plain(
                    "Ich appelliere an alle Fraktionen in diesem Hause, über Parteigrenzen hinweg \
                     an Lösungen zu arbeiten. ",
                ),
                marked(
                    "Der Schutz unserer natürlichen Lebensgrundlagen ist keine ideologische Frage, \
                     sondern eine Frage der Verantwortung gegenüber kommenden Generationen.",
                ),
            ],
        ],
    },
    PlaceholderText {
        paragraphs: &[
            &[plain(
                "Sehr geehrter Herr Präsident, die heute diskutierte Gesetzesvorlage greift tief \
                 in die Grundrechte der Bürgerinnen und Bürger ein. Als Liberale können wir das \
                 nicht hinnehmen.",
            )],
            &[
                marked(
                    "Freiheit ist kein Luxusgut, das man in Krisenzeiten einfach einschränken \
                     kann.",
                ),
                plain(
                    " Im Gegenteil: Gerade in schwierigen Zeiten muss der Staat die Freiheitsrechte \
                     seiner Bürger besonders schützen.",
                ),
            ],
            &[plain(
                "Wir werden einen Änderungsantrag einbringen, der die verhältnismäßige Anwendung \
                 der vorgeschlagenen Maßnahmen sicherstellt und eine automatische Befristung \
                 vorsieht. Befristete Eingriffe, klare Kontrolle — das ist liberale \
                 Rechtsstaatlichkeit.",
            )],
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_has_six_texts_with_three_paragraphs_each() {
        assert_eq!(PLACEHOLDER_TEXTS.len(), 6);
        for text in &PLACEHOLDER_TEXTS {
            assert_eq!(text.paragraphs.len(), 3);
            for paragraph in text.paragraphs {
                assert!(!paragraph.is_empty());
            }
        }
    }

    #[test]
    fn body_selection_cycles_by_index() {
        let a = body_for_index(0);
        let b = body_for_index(6);
        assert!(std::ptr::eq(a, b));
        let c = body_for_index(2);
        let d = body_for_index(8);
        assert!(std::ptr::eq(c, d));
        assert!(!std::ptr::eq(a, c));
    }

    #[test]
    fn highlights_are_present_in_every_text() {
        for text in &PLACEHOLDER_TEXTS {
            let marked = text
                .paragraphs
                .iter()
                .flat_map(|p| p.iter())
                .filter(|s| s.highlight)
                .count();
            assert!(marked >= 1);
        }
    }
}
