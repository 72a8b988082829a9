//! SQL statements of the regional databases.
//!
//! Every event statement selects the same column aliases so one raw row type
//! can decode all of them; regions without a position or client hierarchy
//! select `NULL` in their place. Image attachments are folded into a single
//! `imagenes` column with `GROUP_CONCAT(JSON_OBJECT(...))` to avoid one row per
//! attachment.

/// Raises the `GROUP_CONCAT` limit so long attachment URLs aren't truncated
pub const GROUP_CONCAT_LIMIT: &str = "SET SESSION group_concat_max_len = 10000";

pub const BARRANQUILLA_EVENTS: &str = r#"
SELECT
  n.id_novedad,
  n.consecutivo,
  DATE(n.fecha_hora_novedad) AS fecha,
  te.nombre_tipo_evento AS tipo,
  CONCAT(u.nombre, ' ', u.apellido) AS usuario,
  n.descripcion,
  n.gestion,
  n.evento_critico AS critico,
  p.nombre_puesto AS puesto,
  neg.nombre_negocio AS cliente,
  GROUP_CONCAT(
    JSON_OBJECT(
      'id_imagen', i.id_imagen,
      'url_imagen', i.url_imagen,
      'nombre_archivo', i.nombre_archivo,
      'fecha_subida', i.fecha_subida
    )
  ) AS imagenes
FROM novedades n
JOIN users u ON n.id_usuario = u.id
JOIN tipos_evento te ON n.id_tipo_evento = te.id_tipo_evento
JOIN puestos p ON n.id_puesto = p.id_puesto
JOIN unidades_negocio un ON p.id_unidad = un.id_unidad
JOIN negocios neg ON un.id_negocio = neg.id_negocio
LEFT JOIN imagenes_novedades i ON n.id_novedad = i.id_novedad
WHERE DATE(n.fecha_hora_novedad) BETWEEN ? AND ?
GROUP BY n.id_novedad
ORDER BY n.fecha_hora_novedad DESC
"#;

pub const CARTAGENA_EVENTS: &str = r#"
SELECT
  n.id_novedad,
  n.consecutivo,
  DATE(n.fecha_hora_novedad) AS fecha,
  te.nombre_tipo_evento AS tipo,
  CONCAT(u.nombre, ' ', u.apellido) AS usuario,
  n.descripcion,
  n.gestion,
  n.evento_critico AS critico,
  NULL AS puesto,
  NULL AS cliente,
  GROUP_CONCAT(
    JSON_OBJECT(
      'id_imagen', i.id_imagen,
      'url_imagen', i.url_imagen,
      'nombre_archivo', i.nombre_archivo,
      'fecha_subida', i.fecha_subida
    )
  ) AS imagenes
FROM novedades n
JOIN users u ON n.id_usuario = u.id
JOIN tipos_evento te ON n.id_tipo_evento = te.id_tipo_evento
LEFT JOIN imagenes_novedades i ON n.id_novedad = i.id_novedad
WHERE DATE(n.fecha_hora_novedad) BETWEEN ? AND ?
GROUP BY n.id_novedad
ORDER BY n.fecha_hora_novedad DESC
"#;

pub const CEMENTOS_EVENTS: &str = r#"
SELECT
  n.id_novedad,
  n.consecutivo,
  DATE(n.fecha_hora_novedad) AS fecha,
  te.nombre_tipo_evento AS tipo,
  CONCAT(u.nombre, ' ', u.apellido) AS usuario,
  n.descripcion,
  n.gestion,
  n.evento_critico AS critico,
  NULL AS puesto,
  NULL AS cliente,
  GROUP_CONCAT(
    JSON_OBJECT(
      'id_imagen', i.id_imagen,
      'url_imagen', i.url_imagen,
      'nombre_archivo', i.nombre_archivo,
      'fecha_subida', i.fecha_subida
    )
  ) AS imagenes
FROM novedades_cementos_argos n
JOIN users u ON n.id_usuario = u.id
JOIN Tipos_Evento te ON n.id_tipo_evento = te.id_tipo_evento
LEFT JOIN imagenes_novedades_cementos_argos i ON n.id_novedad = i.id_novedad
WHERE DATE(n.fecha_hora_novedad) BETWEEN ? AND ?
GROUP BY n.id_novedad
ORDER BY n.fecha_hora_novedad DESC
"#;

pub const GRUPO_ARGOS_EVENTS: &str = r#"
SELECT
  n.id_novedad,
  n.consecutivo,
  DATE(n.fecha_novedad) AS fecha,
  tn.nombre_novedad AS tipo,
  CONCAT(u.nombre, ' ', u.apellido) AS usuario,
  n.descripcion,
  n.gestion,
  n.estado = 'no_enviado' AS critico,
  ppr.nombre_puesto AS puesto,
  un.nombre AS cliente,
  GROUP_CONCAT(
    JSON_OBJECT(
      'id_archivo', a.id_archivo,
      'url_archivo', a.url_archivo,
      'fecha_subida', a.fecha_subida
    )
  ) AS imagenes
FROM novedades n
JOIN users u ON n.operador_registro_id = u.id
JOIN tipos_novedad tn ON n.id_tipo_novedad = tn.id_tipo_novedad
LEFT JOIN puestos_para_reportes ppr ON n.id_puesto = ppr.id_puesto
LEFT JOIN unidad_negocio un ON ppr.unidad_negocio_id = un.id
LEFT JOIN archivos_novedad a ON n.id_novedad = a.id_novedad
WHERE DATE(n.fecha_novedad) BETWEEN ? AND ?
GROUP BY n.id_novedad
ORDER BY n.fecha_novedad DESC, n.hora_novedad DESC
"#;

pub const BARRANQUILLA_ABSENCES: &str = r#"
SELECT
  a.id_ausencia,
  a.fecha_inicio,
  a.fecha_fin,
  a.descripcion,
  ta.nombre_tipo_ausencia AS tipo_ausencia,
  CONCAT(c.nombre, ' ', c.apellido) AS colaborador,
  p.nombre_puesto AS puesto,
  CONCAT(u.nombre, ' ', u.apellido) AS usuario_registro,
  a.fecha_registro,
  neg.nombre_negocio AS cliente
FROM ausencias a
JOIN colaboradores c ON a.id_colaborador = c.id
JOIN puestos p ON a.id_puesto = p.id_puesto
JOIN tipos_ausencia ta ON a.id_tipo_ausencia = ta.id_tipo_ausencia
JOIN users u ON a.id_usuario_registro = u.id
LEFT JOIN unidades_negocio un ON p.id_unidad = un.id_unidad
LEFT JOIN negocios neg ON un.id_negocio = neg.id_negocio
WHERE a.activo = TRUE
  AND DATE(a.fecha_inicio) BETWEEN ? AND ?
ORDER BY a.fecha_inicio DESC
"#;

pub const CARTAGENA_ABSENCES: &str = BARRANQUILLA_ABSENCES;

pub const ACTIVE_ABSENCE_TYPES: &str = r#"
SELECT nombre_tipo_ausencia
FROM tipos_ausencia
WHERE activo = TRUE
ORDER BY nombre_tipo_ausencia
"#;
