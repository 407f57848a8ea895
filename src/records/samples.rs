use chrono::NaiveDate;

use super::record::FeedbackRecord;

/// (author, recipient, feedback, context, y, m, d), newest first.
const SAMPLES: [(&str, &str, &str, &str, i32, u32, u32); 3] = [
    (
        "María González",
        "Juan Pérez",
        "Excelente trabajo en el proyecto X. Muy proactivo y colaborativo.",
        "Sesión con Cliente - Proyecto Q4",
        2024,
        1,
        15,
    ),
    (
        "Carlos Rodríguez",
        "Ana Martínez",
        "Necesita mejorar la comunicación en reuniones de equipo.",
        "Reunión de equipo - Sprint Planning",
        2024,
        1,
        14,
    ),
    (
        "Laura Sánchez",
        "Pedro López",
        "Muy buen desempeño técnico, pero debe trabajar más en la documentación.",
        "Charla Mano a Mano - Revisión mensual",
        2024,
        1,
        13,
    ),
];

pub fn sample_records() -> Vec<FeedbackRecord> {
    SAMPLES
        .iter()
        .map(|&(author, recipient, feedback, context, y, m, d)| {
            let record = FeedbackRecord::new(author, recipient, feedback, context);
            match NaiveDate::from_ymd_opt(y, m, d) {
                Some(date) => record.dated(date),
                None => record,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_newest_first() {
        let records = sample_records();
        assert_eq!(records.len(), 3);
        assert!(records.windows(2).all(|w| w[0].date > w[1].date));
        assert_eq!(records[0].recipient_name, "Juan Pérez");
    }
}
