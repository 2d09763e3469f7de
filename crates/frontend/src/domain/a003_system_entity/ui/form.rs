use contracts::domain::a003_system_entity::aggregate::{
    CreateSystemEntityDto, SystemEntity, UpdateSystemEntityDto,
};
use contracts::enums::{CodeTable, ImportState, RecordStatus, SyncMode};

use crate::shared::crud::form::{
    changed, code_options, FieldErrors, FieldSpec, FormMode, FormModel, USER_FIELD,
};

pub const NAME: &str = "nombreEntidadSistema";
pub const MODULE: &str = "idModuloSistema";
pub const SYNC_MODE: &str = "modoSincronizacion";
pub const ROWS: &str = "numeroFilasPorPagina";
pub const IMPORT_STATE: &str = "estadoImportacion";
pub const TEMPLATE: &str = "nombrePlantillaImportacion";
pub const STATUS: &str = "indicadorEstado";

const DEFAULT_ROWS: &str = "20";

#[derive(Debug, Clone, PartialEq)]
pub struct SystemEntityForm {
    pub nombre: String,
    pub modulo: String,
    pub modo: SyncMode,
    pub filas: String,
    /// Rows per page as loaded; an untouched value is neither checked nor sent
    pub filas_guardadas: Option<String>,
    pub importacion: ImportState,
    pub plantilla: String,
    pub estado: RecordStatus,
    pub usuario: String,
}

impl Default for SystemEntityForm {
    fn default() -> Self {
        Self {
            nombre: String::new(),
            modulo: String::new(),
            modo: SyncMode::Hybrid,
            filas: DEFAULT_ROWS.to_string(),
            filas_guardadas: None,
            importacion: ImportState::Disabled,
            plantilla: String::new(),
            estado: RecordStatus::Active,
            usuario: String::new(),
        }
    }
}

impl SystemEntityForm {
    fn module_id(&self, errors: &mut FieldErrors) -> Option<i64> {
        errors.require_id(MODULE, &self.modulo, "El módulo del sistema es requerido")
    }

    fn rows(&self, errors: &mut FieldErrors) -> Option<i64> {
        errors.require_id(ROWS, &self.filas, "Ingrese un número de filas válido")
    }

    fn rows_touched(&self) -> bool {
        self.filas_guardadas.as_deref() != Some(self.filas.trim())
    }

    fn template(&self) -> Option<String> {
        let template = self.plantilla.trim();
        (!template.is_empty()).then(|| template.to_string())
    }
}

impl FormModel for SystemEntityForm {
    type Item = SystemEntity;

    fn from_item(item: &SystemEntity) -> Self {
        Self {
            nombre: item.nombre_entidad_sistema.clone(),
            modulo: item.id_modulo_sistema.to_string(),
            modo: item.modo_sincronizacion,
            filas: item.numero_filas_por_pagina.to_string(),
            filas_guardadas: Some(item.numero_filas_por_pagina.to_string()),
            importacion: item.estado_importacion,
            plantilla: item.nombre_plantilla_importacion.clone().unwrap_or_default(),
            estado: item.indicador_estado,
            usuario: String::new(),
        }
    }

    fn schema(mode: FormMode) -> Vec<FieldSpec> {
        let mut fields = vec![
            FieldSpec::text(NAME, "Nombre de la Entidad")
                .required()
                .placeholder("Ej: VENTAS"),
            FieldSpec::number(MODULE, "ID Módulo Sistema").required(),
            FieldSpec::select(SYNC_MODE, "Modo de Sincronización", code_options::<SyncMode>()),
            FieldSpec::number(ROWS, "Filas por Página"),
            FieldSpec::select(
                IMPORT_STATE,
                "Estado de Importación",
                code_options::<ImportState>(),
            ),
            FieldSpec::text(TEMPLATE, "Plantilla de Importación")
                .placeholder("Nombre del archivo de plantilla"),
        ];
        match mode {
            FormMode::Create => {
                fields.push(FieldSpec::text(USER_FIELD, "Usuario Registro").required());
            }
            FormMode::Edit => {
                fields.push(FieldSpec::select(
                    STATUS,
                    "Estado",
                    code_options::<RecordStatus>(),
                ));
                fields.push(FieldSpec::text(USER_FIELD, "Usuario Modificación").required());
            }
        }
        fields
    }

    fn value(&self, key: &str) -> String {
        match key {
            NAME => self.nombre.clone(),
            MODULE => self.modulo.clone(),
            SYNC_MODE => self.modo.code().to_string(),
            ROWS => self.filas.clone(),
            IMPORT_STATE => self.importacion.code().to_string(),
            TEMPLATE => self.plantilla.clone(),
            STATUS => self.estado.code().to_string(),
            USER_FIELD => self.usuario.clone(),
            _ => String::new(),
        }
    }

    fn set_value(&mut self, key: &str, value: String) {
        match key {
            NAME => self.nombre = value,
            MODULE => self.modulo = value,
            SYNC_MODE => {
                if let Some(mode) = SyncMode::from_code(&value) {
                    self.modo = mode;
                }
            }
            ROWS => self.filas = value,
            IMPORT_STATE => {
                if let Some(state) = ImportState::from_code(&value) {
                    self.importacion = state;
                }
            }
            TEMPLATE => self.plantilla = value,
            STATUS => {
                if let Some(status) = RecordStatus::from_code(&value) {
                    self.estado = status;
                }
            }
            USER_FIELD => self.usuario = value,
            _ => {}
        }
    }

    fn validate(&self, mode: FormMode) -> FieldErrors {
        let mut errors = FieldErrors::default();
        errors.require(NAME, &self.nombre, "El nombre es requerido");
        self.module_id(&mut errors);
        if mode == FormMode::Create || self.rows_touched() {
            self.rows(&mut errors);
        }
        let user_message = match mode {
            FormMode::Create => "El usuario de registro es requerido",
            FormMode::Edit => "El usuario de modificación es requerido",
        };
        errors.require(USER_FIELD, &self.usuario, user_message);
        errors
    }

    fn to_create(&self) -> Result<CreateSystemEntityDto, FieldErrors> {
        let mut errors = self.validate(FormMode::Create);
        let module = self.module_id(&mut errors);
        let rows = self.rows(&mut errors);
        errors.into_result()?;

        Ok(CreateSystemEntityDto {
            nombre_entidad_sistema: self.nombre.trim().to_string(),
            id_modulo_sistema: module.unwrap_or_default(),
            usuario_registro: self.usuario.trim().to_string(),
            modo_sincronizacion: Some(self.modo),
            numero_filas_por_pagina: rows,
            estado_importacion: Some(self.importacion),
            nombre_plantilla_importacion: self.template(),
        })
    }

    fn to_update(&self, original: &SystemEntity) -> Result<UpdateSystemEntityDto, FieldErrors> {
        let mut errors = self.validate(FormMode::Edit);
        let module = self.module_id(&mut errors);
        let rows = if self.rows_touched() {
            self.rows(&mut errors)
        } else {
            None
        };
        errors.into_result()?;

        // A cleared template goes out as "" so the server drops it.
        let template = changed(
            &original.nombre_plantilla_importacion.clone().unwrap_or_default(),
            self.template().unwrap_or_default(),
        );

        Ok(UpdateSystemEntityDto {
            nombre_entidad_sistema: changed(
                &original.nombre_entidad_sistema,
                self.nombre.trim().to_string(),
            ),
            indicador_estado: changed(&original.indicador_estado, self.estado),
            id_modulo_sistema: changed(&original.id_modulo_sistema, module.unwrap_or_default()),
            modo_sincronizacion: changed(&original.modo_sincronizacion, self.modo),
            numero_filas_por_pagina: rows
                .and_then(|rows| changed(&original.numero_filas_por_pagina, rows)),
            estado_importacion: changed(&original.estado_importacion, self.importacion),
            nombre_plantilla_importacion: template,
            usuario_modificacion: self.usuario.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::entity_json;
    use serde_json::json;

    fn entity() -> SystemEntity {
        serde_json::from_value(entity_json(4, "VENTAS", vec![])).unwrap()
    }

    #[test]
    fn test_create_defaults() {
        let form = SystemEntityForm::for_create();
        assert_eq!(form.value(SYNC_MODE), "2");
        assert_eq!(form.value(ROWS), "20");
        assert_eq!(form.value(IMPORT_STATE), "0");
        assert_eq!(form.value(TEMPLATE), "");
    }

    #[test]
    fn test_create_payload_omits_blank_template() {
        let mut form = SystemEntityForm::for_create();
        form.set_value(NAME, "COMPRAS".to_string());
        form.set_value(MODULE, "3".to_string());
        form.set_value(USER_FIELD, "admin".to_string());

        let value = serde_json::to_value(form.to_create().unwrap()).unwrap();

        assert_eq!(
            value,
            json!({
                "nombreEntidadSistema": "COMPRAS",
                "idModuloSistema": 3,
                "usuarioRegistro": "admin",
                "modoSincronizacion": "2",
                "numeroFilasPorPagina": 20,
                "estadoImportacion": "0"
            })
        );
    }

    #[test]
    fn test_validation_messages_depend_on_mode() {
        let form = SystemEntityForm::for_create();
        let errors = form.validate(FormMode::Create);
        assert_eq!(errors.get(NAME), Some("El nombre es requerido"));
        assert_eq!(errors.get(MODULE), Some("El módulo del sistema es requerido"));
        assert_eq!(errors.get(USER_FIELD), Some("El usuario de registro es requerido"));

        let errors = SystemEntityForm::from_item(&entity()).validate(FormMode::Edit);
        assert_eq!(
            errors.get(USER_FIELD),
            Some("El usuario de modificación es requerido")
        );
    }

    #[test]
    fn test_update_sends_only_changes() {
        let mut form = SystemEntityForm::from_item(&entity());
        form.set_value(NAME, "VENTAS2".to_string());
        form.set_value(USER_FIELD, "jdoe".to_string());

        let value = serde_json::to_value(form.to_update(&entity()).unwrap()).unwrap();

        assert_eq!(
            value,
            json!({ "nombreEntidadSistema": "VENTAS2", "usuarioModificacion": "jdoe" })
        );
    }

    #[test]
    fn test_untouched_null_rows_do_not_block_edit() {
        let mut value = entity_json(5, "VENTAS", vec![]);
        value["numeroFilasPorPagina"] = serde_json::Value::Null;
        let original: SystemEntity = serde_json::from_value(value).unwrap();
        let mut form = SystemEntityForm::from_item(&original);
        form.set_value(NAME, "VENTAS2".to_string());
        form.set_value(USER_FIELD, "jdoe".to_string());

        assert!(form.validate(FormMode::Edit).is_empty());
        let value = serde_json::to_value(form.to_update(&original).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({ "nombreEntidadSistema": "VENTAS2", "usuarioModificacion": "jdoe" })
        );
    }

    #[test]
    fn test_changed_rows_are_sent() {
        let mut form = SystemEntityForm::from_item(&entity());
        form.set_value(ROWS, "50".to_string());
        form.set_value(USER_FIELD, "jdoe".to_string());
        let dto = form.to_update(&entity()).unwrap();
        assert_eq!(dto.numero_filas_por_pagina, Some(50));
    }

    #[test]
    fn test_rows_must_be_positive() {
        let mut form = SystemEntityForm::from_item(&entity());
        form.set_value(ROWS, "0".to_string());
        form.set_value(USER_FIELD, "jdoe".to_string());
        assert!(form.to_update(&entity()).unwrap_err().get(ROWS).is_some());
    }
}
