// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use serde::Deserialize;

use crate::menu::{DishPatch, NewDish};

#[derive(Deserialize, Debug)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Add-dish form. Every field arrives as a string; the store applies the
/// trim/require/coerce rules.
#[derive(Deserialize, Debug, Default)]
pub struct AddDishForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub calories: String,
    #[serde(default)]
    pub image: String,
}

impl From<AddDishForm> for NewDish {
    fn from(form: AddDishForm) -> Self {
        NewDish {
            name: form.name,
            price: form.price,
            category: form.category,
            calories: form.calories,
            image: form.image,
        }
    }
}

/// Edit form: absent fields keep the stored value.
#[derive(Deserialize, Debug, Default)]
pub struct EditDishForm {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<String>,
    pub calories: Option<String>,
    pub image: Option<String>,
}

impl From<EditDishForm> for DishPatch {
    fn from(form: EditDishForm) -> Self {
        DishPatch {
            name: form.name,
            category: form.category,
            price: form.price,
            calories: form.calories,
            image: form.image,
        }
    }
}
