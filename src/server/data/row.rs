//! Raw rows as returned by the regional databases.
//!
//! Regions disagree on column types (integer vs text ids, `DATE` vs `DATETIME`,
//! `TINYINT` vs `BIGINT` flags), so rows are decoded by hand, trying each
//! representation a column is known to take.

use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{DbErr, FromQueryResult, QueryResult};

use crate::model::record::Identifier;

/// Date column which is either a temporal value or already formatted text
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawDate {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Text(String),
}

/// Event row shared by every region's event statement
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawNovedadRow {
    pub id_novedad: Option<Identifier>,
    pub consecutivo: Option<Identifier>,
    pub fecha: Option<RawDate>,
    pub tipo: Option<String>,
    pub usuario: Option<String>,
    pub descripcion: Option<String>,
    pub gestion: Option<String>,
    pub critico: Option<bool>,
    pub puesto: Option<String>,
    pub cliente: Option<String>,
    /// Comma separated JSON objects produced by `GROUP_CONCAT(JSON_OBJECT(...))`
    pub imagenes: Option<String>,
}

impl FromQueryResult for RawNovedadRow {
    fn from_query_result(res: &QueryResult, pre: &str) -> Result<Self, DbErr> {
        Ok(Self {
            id_novedad: get_identifier(res, pre, "id_novedad")?,
            consecutivo: get_identifier(res, pre, "consecutivo")?,
            fecha: get_date(res, pre, "fecha")?,
            tipo: get_text(res, pre, "tipo")?,
            usuario: get_text(res, pre, "usuario")?,
            descripcion: get_text(res, pre, "descripcion")?,
            gestion: get_text(res, pre, "gestion")?,
            critico: get_flag(res, pre, "critico")?,
            puesto: get_text(res, pre, "puesto")?,
            cliente: get_text(res, pre, "cliente")?,
            imagenes: get_text(res, pre, "imagenes")?,
        })
    }
}

/// Absence row shared by every region's absence statement
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawAusenciaRow {
    pub id_ausencia: Option<Identifier>,
    pub fecha_inicio: Option<RawDate>,
    pub fecha_fin: Option<RawDate>,
    pub descripcion: Option<String>,
    pub tipo_ausencia: Option<String>,
    pub colaborador: Option<String>,
    pub puesto: Option<String>,
    pub usuario_registro: Option<String>,
    pub fecha_registro: Option<RawDate>,
    pub cliente: Option<String>,
}

impl FromQueryResult for RawAusenciaRow {
    fn from_query_result(res: &QueryResult, pre: &str) -> Result<Self, DbErr> {
        Ok(Self {
            id_ausencia: get_identifier(res, pre, "id_ausencia")?,
            fecha_inicio: get_date(res, pre, "fecha_inicio")?,
            fecha_fin: get_date(res, pre, "fecha_fin")?,
            descripcion: get_text(res, pre, "descripcion")?,
            tipo_ausencia: get_text(res, pre, "tipo_ausencia")?,
            colaborador: get_text(res, pre, "colaborador")?,
            puesto: get_text(res, pre, "puesto")?,
            usuario_registro: get_text(res, pre, "usuario_registro")?,
            fecha_registro: get_date(res, pre, "fecha_registro")?,
            cliente: get_text(res, pre, "cliente")?,
        })
    }
}

/// Name of an active absence type
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AbsenceTypeRow {
    pub nombre_tipo_ausencia: Option<String>,
}

impl FromQueryResult for AbsenceTypeRow {
    fn from_query_result(res: &QueryResult, pre: &str) -> Result<Self, DbErr> {
        Ok(Self {
            nombre_tipo_ausencia: get_text(res, pre, "nombre_tipo_ausencia")?,
        })
    }
}

fn get_identifier(res: &QueryResult, pre: &str, col: &str) -> Result<Option<Identifier>, DbErr> {
    if let Ok(value) = res.try_get::<Option<i64>>(pre, col) {
        return Ok(value.map(Identifier::Number));
    }

    // Unsigned columns above i64::MAX are kept as text rather than wrapped
    if let Ok(value) = res.try_get::<Option<u64>>(pre, col) {
        return Ok(value.map(|v| match i64::try_from(v) {
            Ok(v) => Identifier::Number(v),
            Err(_) => Identifier::Text(v.to_string()),
        }));
    }

    Ok(get_text(res, pre, col)?.map(Identifier::Text))
}

fn get_date(res: &QueryResult, pre: &str, col: &str) -> Result<Option<RawDate>, DbErr> {
    if let Ok(value) = res.try_get::<Option<NaiveDate>>(pre, col) {
        return Ok(value.map(RawDate::Date));
    }

    if let Ok(value) = res.try_get::<Option<NaiveDateTime>>(pre, col) {
        return Ok(value.map(RawDate::DateTime));
    }

    Ok(get_text(res, pre, col)?.map(RawDate::Text))
}

fn get_flag(res: &QueryResult, pre: &str, col: &str) -> Result<Option<bool>, DbErr> {
    if let Ok(value) = res.try_get::<Option<bool>>(pre, col) {
        return Ok(value);
    }

    Ok(res.try_get::<Option<i64>>(pre, col)?.map(|v| v != 0))
}

fn get_text(res: &QueryResult, pre: &str, col: &str) -> Result<Option<String>, DbErr> {
    if let Ok(value) = res.try_get::<Option<String>>(pre, col) {
        return Ok(value);
    }

    // GROUP_CONCAT over binary collations comes back as a blob
    Ok(res
        .try_get::<Option<Vec<u8>>>(pre, col)?
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
}
