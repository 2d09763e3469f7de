use contracts::domain::a002_parameter_group::aggregate::{
    CreateParameterGroupDto, ParameterGroup, UpdateParameterGroupDto,
};

use crate::shared::crud::form::{
    changed, FieldErrors, FieldSpec, FormMode, FormModel, USER_FIELD,
};

pub const NAME: &str = "nombreGrupoParametro";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterGroupForm {
    pub nombre: String,
    pub usuario: String,
}

impl FormModel for ParameterGroupForm {
    type Item = ParameterGroup;

    fn from_item(item: &ParameterGroup) -> Self {
        Self {
            nombre: item.nombre_grupo_parametro.clone(),
            usuario: String::new(),
        }
    }

    fn schema(mode: FormMode) -> Vec<FieldSpec> {
        let user_label = match mode {
            FormMode::Create => "Usuario Registro",
            FormMode::Edit => "Usuario Modificación",
        };
        vec![
            FieldSpec::text(NAME, "Nombre del Grupo")
                .required()
                .placeholder("Ej: Configuración General"),
            FieldSpec::text(USER_FIELD, user_label)
                .required()
                .placeholder("Ingrese su usuario"),
        ]
    }

    fn value(&self, key: &str) -> String {
        match key {
            NAME => self.nombre.clone(),
            USER_FIELD => self.usuario.clone(),
            _ => String::new(),
        }
    }

    fn set_value(&mut self, key: &str, value: String) {
        match key {
            NAME => self.nombre = value,
            USER_FIELD => self.usuario = value,
            _ => {}
        }
    }

    fn validate(&self, _mode: FormMode) -> FieldErrors {
        let mut errors = FieldErrors::default();
        errors.require(NAME, &self.nombre, "El nombre del grupo es obligatorio");
        errors.require(USER_FIELD, &self.usuario, "El usuario es obligatorio");
        errors
    }

    fn to_create(&self) -> Result<CreateParameterGroupDto, FieldErrors> {
        self.validate(FormMode::Create).into_result()?;
        Ok(CreateParameterGroupDto {
            nombre_grupo_parametro: self.nombre.trim().to_string(),
            usuario_registro: self.usuario.trim().to_string(),
        })
    }

    fn to_update(&self, original: &ParameterGroup) -> Result<UpdateParameterGroupDto, FieldErrors> {
        self.validate(FormMode::Edit).into_result()?;
        Ok(UpdateParameterGroupDto {
            nombre_grupo_parametro: changed(
                &original.nombre_grupo_parametro,
                self.nombre.trim().to_string(),
            ),
            usuario_modificacion: self.usuario.trim().to_string(),
        })
    }
}
