use contracts::domain::a001_system_parameter::aggregate::{
    CreateSystemParameterDto, SystemParameter, UpdateSystemParameterDto,
};
use contracts::enums::{CodeTable, ParameterStatus};

use crate::shared::crud::form::{
    changed, code_options, FieldErrors, FieldSpec, FormMode, FormModel, LookupKind, USER_FIELD,
};

pub const NAME: &str = "nombreParametroSistema";
pub const VALUE: &str = "valorParametroSistema";
pub const GROUP: &str = "idGrupoParametro";
pub const ENTITY: &str = "idEntidadSistema";
pub const STATUS: &str = "indicadorEstado";

#[derive(Debug, Clone, PartialEq)]
pub struct SystemParameterForm {
    pub nombre: String,
    pub valor: String,
    /// Empty for "no group"
    pub grupo: String,
    pub entidad: String,
    pub estado: ParameterStatus,
    pub usuario: String,
}

impl Default for SystemParameterForm {
    fn default() -> Self {
        Self {
            nombre: String::new(),
            valor: String::new(),
            grupo: String::new(),
            entidad: String::new(),
            estado: ParameterStatus::Active,
            usuario: String::new(),
        }
    }
}

impl SystemParameterForm {
    fn group_id(&self, errors: &mut FieldErrors) -> Option<i64> {
        let raw = self.grupo.trim();
        if raw.is_empty() {
            return None;
        }
        errors.require_id(GROUP, raw, "Grupo no válido")
    }
}

impl FormModel for SystemParameterForm {
    type Item = SystemParameter;

    fn from_item(item: &SystemParameter) -> Self {
        Self {
            nombre: item.nombre_parametro_sistema.clone(),
            valor: item.valor_parametro_sistema.clone(),
            grupo: item
                .id_grupo_parametro
                .map(|id| id.to_string())
                .unwrap_or_default(),
            entidad: item.id_entidad_sistema.to_string(),
            estado: item.indicador_estado,
            usuario: String::new(),
        }
    }

    fn schema(mode: FormMode) -> Vec<FieldSpec> {
        let mut fields = vec![
            FieldSpec::text(NAME, "Nombre del Parámetro").required(),
            FieldSpec::text(VALUE, "Valor del Parámetro").required(),
            FieldSpec::lookup(GROUP, "Grupo de Parámetro", LookupKind::ParameterGroups)
                .with_empty("Sin grupo"),
        ];
        match mode {
            FormMode::Create => {
                fields.push(
                    FieldSpec::number(ENTITY, "ID Entidad Sistema")
                        .required()
                        .placeholder("Ej: 5"),
                );
                fields.push(FieldSpec::text(USER_FIELD, "Usuario Registro").required());
            }
            FormMode::Edit => {
                fields.push(FieldSpec::select(
                    STATUS,
                    "Estado",
                    code_options::<ParameterStatus>(),
                ));
                fields.push(FieldSpec::text(USER_FIELD, "Usuario Modificación").required());
            }
        }
        fields
    }

    fn value(&self, key: &str) -> String {
        match key {
            NAME => self.nombre.clone(),
            VALUE => self.valor.clone(),
            GROUP => self.grupo.clone(),
            ENTITY => self.entidad.clone(),
            STATUS => self.estado.code().to_string(),
            USER_FIELD => self.usuario.clone(),
            _ => String::new(),
        }
    }

    fn set_value(&mut self, key: &str, value: String) {
        match key {
            NAME => self.nombre = value,
            VALUE => self.valor = value,
            GROUP => self.grupo = value,
            ENTITY => self.entidad = value,
            STATUS => {
                if let Some(status) = ParameterStatus::from_code(&value) {
                    self.estado = status;
                }
            }
            USER_FIELD => self.usuario = value,
            _ => {}
        }
    }

    fn validate(&self, mode: FormMode) -> FieldErrors {
        let mut errors = FieldErrors::default();
        errors.require(NAME, &self.nombre, "El nombre es obligatorio");
        errors.require(VALUE, &self.valor, "El valor es obligatorio");
        self.group_id(&mut errors);
        if mode == FormMode::Create {
            errors.require_id(ENTITY, &self.entidad, "Ingrese un ID de entidad válido");
        }
        errors.require(USER_FIELD, &self.usuario, "El usuario es obligatorio");
        errors
    }

    fn to_create(&self) -> Result<CreateSystemParameterDto, FieldErrors> {
        let mut errors = self.validate(FormMode::Create);
        let group = self.group_id(&mut errors);
        let entity = errors.require_id(ENTITY, &self.entidad, "Ingrese un ID de entidad válido");
        errors.into_result()?;

        Ok(CreateSystemParameterDto {
            nombre_parametro_sistema: self.nombre.trim().to_string(),
            valor_parametro_sistema: self.valor.trim().to_string(),
            id_grupo_parametro: group,
            id_entidad_sistema: entity.unwrap_or_default(),
            usuario_registro: self.usuario.trim().to_string(),
        })
    }

    fn to_update(
        &self,
        original: &SystemParameter,
    ) -> Result<UpdateSystemParameterDto, FieldErrors> {
        let mut errors = self.validate(FormMode::Edit);
        let group = self.group_id(&mut errors);
        errors.into_result()?;

        Ok(UpdateSystemParameterDto {
            nombre_parametro_sistema: changed(
                &original.nombre_parametro_sistema,
                self.nombre.trim().to_string(),
            ),
            valor_parametro_sistema: changed(
                &original.valor_parametro_sistema,
                self.valor.trim().to_string(),
            ),
            id_grupo_parametro: changed(&original.id_grupo_parametro, group),
            indicador_estado: changed(&original.indicador_estado, self.estado),
            usuario_modificacion: self.usuario.trim().to_string(),
        })
    }
}
