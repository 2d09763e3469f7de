use contracts::domain::a004_entity_element::aggregate::{
    CreateEntityElementDto, EntityElement, UpdateEntityElementDto,
};
use contracts::enums::{CodeTable, Editability, Visibility};

use crate::shared::crud::form::{
    changed, code_options, FieldErrors, FieldSpec, FormMode, FormModel, LookupKind, USER_FIELD,
};

pub const ENTITY: &str = "idEntidad";
pub const NAME: &str = "nombreElemento";
pub const VISIBLE: &str = "visible";
pub const EDITABLE: &str = "editable";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityElementForm {
    pub entidad: String,
    pub nombre: String,
    pub visible: Visibility,
    pub editable: Editability,
    pub usuario: String,
}

impl FormModel for EntityElementForm {
    type Item = EntityElement;

    fn from_item(item: &EntityElement) -> Self {
        Self {
            entidad: item.id_entidad.to_string(),
            nombre: item.nombre_elemento.clone(),
            visible: item.visible,
            editable: item.editable,
            usuario: String::new(),
        }
    }

    fn schema(mode: FormMode) -> Vec<FieldSpec> {
        let mut fields = Vec::new();
        if mode == FormMode::Create {
            fields.push(
                FieldSpec::lookup(ENTITY, "Entidad", LookupKind::Entities)
                    .required()
                    .with_empty("Seleccione una entidad"),
            );
        }
        fields.push(FieldSpec::text(NAME, "Nombre del Elemento").required());
        fields.push(FieldSpec::select(VISIBLE, "Visible", code_options::<Visibility>()));
        fields.push(FieldSpec::select(EDITABLE, "Editable", code_options::<Editability>()));
        let user_label = match mode {
            FormMode::Create => "Usuario Registro",
            FormMode::Edit => "Usuario Modificación",
        };
        fields.push(FieldSpec::text(USER_FIELD, user_label).required());
        fields
    }

    fn value(&self, key: &str) -> String {
        match key {
            ENTITY => self.entidad.clone(),
            NAME => self.nombre.clone(),
            VISIBLE => self.visible.code().to_string(),
            EDITABLE => self.editable.code().to_string(),
            USER_FIELD => self.usuario.clone(),
            _ => String::new(),
        }
    }

    fn set_value(&mut self, key: &str, value: String) {
        match key {
            ENTITY => self.entidad = value,
            NAME => self.nombre = value,
            VISIBLE => {
                if let Some(visible) = Visibility::from_code(&value) {
                    self.visible = visible;
                }
            }
            EDITABLE => {
                if let Some(editable) = Editability::from_code(&value) {
                    self.editable = editable;
                }
            }
            USER_FIELD => self.usuario = value,
            _ => {}
        }
    }

    fn validate(&self, mode: FormMode) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if mode == FormMode::Create {
            errors.require_id(ENTITY, &self.entidad, "La entidad es requerida");
        }
        errors.require(NAME, &self.nombre, "El nombre del elemento es requerido");
        errors.require(USER_FIELD, &self.usuario, "El usuario es requerido");
        errors
    }

    fn to_create(&self) -> Result<CreateEntityElementDto, FieldErrors> {
        let mut errors = self.validate(FormMode::Create);
        let entity = errors.require_id(ENTITY, &self.entidad, "La entidad es requerida");
        errors.into_result()?;

        Ok(CreateEntityElementDto {
            id_entidad: entity.unwrap_or_default(),
            nombre_elemento: self.nombre.trim().to_string(),
            visible: self.visible,
            editable: self.editable,
            usuario_registro: self.usuario.trim().to_string(),
        })
    }

    fn to_update(&self, original: &EntityElement) -> Result<UpdateEntityElementDto, FieldErrors> {
        self.validate(FormMode::Edit).into_result()?;

        Ok(UpdateEntityElementDto {
            nombre_elemento: changed(&original.nombre_elemento, self.nombre.trim().to_string()),
            visible: changed(&original.visible, self.visible),
            editable: changed(&original.editable, self.editable),
            usuario_modificacion: self.usuario.trim().to_string(),
        })
    }
}
