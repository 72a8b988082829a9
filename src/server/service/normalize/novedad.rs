use dioxus_logger::tracing;

use crate::{
    model::{
        novedad::{Novedad, NOT_AVAILABLE},
        record::Identifier,
    },
    server::{
        data::row::RawNovedadRow,
        error::normalize::NormalizeError,
        service::normalize::{format_date, image::decode_images, non_blank_or, text_or, Normalize},
    },
};

impl Normalize for RawNovedadRow {
    type Record = Novedad;

    fn normalize(self, project: &str) -> Result<Novedad, NormalizeError> {
        let id = self
            .id_novedad
            .ok_or(NormalizeError::MissingField("id_novedad"))?;
        let date = self
            .fecha
            .as_ref()
            .map(format_date)
            .ok_or(NormalizeError::MissingField("fecha"))?;

        let images = decode_images(self.imagenes.as_deref()).unwrap_or_else(|e| {
            tracing::warn!(
                "Discarding malformed attachments of {} event {}: {}",
                project,
                id,
                e
            );
            Vec::new()
        });

        Ok(Novedad {
            sequence_number: self
                .consecutivo
                .unwrap_or_else(|| Identifier::Text(String::new())),
            date,
            event_type: non_blank_or(self.tipo, NOT_AVAILABLE),
            project: project.to_string(),
            user: non_blank_or(self.usuario, NOT_AVAILABLE),
            description: text_or(self.descripcion, ""),
            management_note: text_or(self.gestion, ""),
            critical: self.critico.unwrap_or(false),
            position: non_blank_or(self.puesto, NOT_AVAILABLE),
            client: non_blank_or(self.cliente, NOT_AVAILABLE),
            images,
            id,
        })
    }
}
