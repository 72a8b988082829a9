//! Decoding of the aggregated attachment column.

use serde::Deserialize;

use crate::model::novedad::ImageDto;

/// Attachment object as built by `JSON_OBJECT` in the event statements
///
/// Regions storing files instead of images name their keys `id_archivo` and
/// `url_archivo`; both spellings decode into the same fields.
#[derive(Deserialize)]
struct RawImage {
    #[serde(alias = "id_archivo")]
    id_imagen: Option<i64>,
    #[serde(alias = "url_archivo")]
    url_imagen: Option<String>,
    nombre_archivo: Option<String>,
    fecha_subida: Option<String>,
}

/// Decodes the comma separated JSON objects of an aggregated attachment column
///
/// An absent or blank column is an empty list. Objects without a URL are
/// dropped: they are what the `LEFT JOIN` yields for an event with no
/// attachments.
///
/// # Returns
/// - `Ok(Vec<ImageDto>)` - Attachments in the order they were aggregated
/// - `Err(serde_json::Error)` - The column isn't a list of JSON objects once wrapped in `[`..`]`,
///   e.g. when `GROUP_CONCAT` truncated it
pub fn decode_images(raw: Option<&str>) -> Result<Vec<ImageDto>, serde_json::Error> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(Vec::new());
    };

    let images: Vec<RawImage> = serde_json::from_str(&format!("[{}]", raw))?;

    Ok(images
        .into_iter()
        .filter_map(|image| {
            let url = image.url_imagen.filter(|url| !url.is_empty())?;

            Some(ImageDto {
                id: image.id_imagen,
                url,
                original_filename: image.nombre_archivo,
                uploaded_at: image.fecha_subida.unwrap_or_default(),
            })
        })
        .collect())
}
