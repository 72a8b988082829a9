use chrono::NaiveDate;
use dioxus_logger::tracing;

use crate::{
    model::{ausencia::Ausencia, novedad::NOT_AVAILABLE},
    server::{
        data::row::RawAusenciaRow,
        error::normalize::NormalizeError,
        service::normalize::{format_date, non_blank_or, parse_day, text_or, Normalize},
    },
};

impl Normalize for RawAusenciaRow {
    type Record = Ausencia;

    fn normalize(self, project: &str) -> Result<Ausencia, NormalizeError> {
        let id = self
            .id_ausencia
            .ok_or(NormalizeError::MissingField("id_ausencia"))?;
        let start = self
            .fecha_inicio
            .ok_or(NormalizeError::MissingField("fecha_inicio"))?;
        let end = self
            .fecha_fin
            .ok_or(NormalizeError::MissingField("fecha_fin"))?;

        let start_day = parse_day(&start, "fecha_inicio")?;
        let end_day = parse_day(&end, "fecha_fin")?;

        let duration_days = match inclusive_days(start_day, end_day) {
            Some(days) => days,
            None => {
                tracing::warn!(
                    "{} absence {} ends ({}) before it starts ({}), counting it as 1 day",
                    project,
                    id,
                    end_day,
                    start_day
                );
                1
            }
        };

        Ok(Ausencia {
            id,
            start_date: format_date(&start),
            end_date: format_date(&end),
            description: text_or(self.descripcion, ""),
            absence_type: non_blank_or(self.tipo_ausencia, NOT_AVAILABLE),
            collaborator: non_blank_or(self.colaborador, NOT_AVAILABLE),
            position: non_blank_or(self.puesto, NOT_AVAILABLE),
            registered_by: non_blank_or(self.usuario_registro, NOT_AVAILABLE),
            registered_at: self
                .fecha_registro
                .as_ref()
                .map(format_date)
                .unwrap_or_default(),
            client: non_blank_or(self.cliente, project),
            project: project.to_string(),
            duration_days,
        })
    }
}

/// Days between `start` and `end` with both ends included, `None` if `end` is before `start`
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> Option<i64> {
    let days = (end - start).num_days() + 1;

    (days >= 1).then_some(days)
}
