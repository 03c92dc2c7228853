// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Embedded HTML for the customer page and the admin panel. Templates are
//! compiled into the binary; rendering is plain placeholder substitution.

use crate::menu::Dish;

const CUSTOMER_PAGE: &str = include_str!("../templates/food.html");
const LOGIN_PAGE: &str = include_str!("../templates/admin_login.html");
const DASHBOARD_PAGE: &str = include_str!("../templates/admin_dashboard.html");

pub fn customer_page() -> &'static str {
    CUSTOMER_PAGE
}

pub fn login_page(error: Option<&str>) -> String {
    let error_html = match error {
        Some(msg) => format!(r#"<p class="error">{}</p>"#, escape(msg)),
        None => String::new(),
    };
    LOGIN_PAGE.replace("{{error}}", &error_html)
}

/// Dashboard listing. Each row carries an inline edit form posting to the
/// dish's edit route and a delete button posting to its delete route.
pub fn dashboard_page(menu: &[Dish]) -> String {
    let mut rows = String::new();
    for dish in menu {
        rows.push_str(&format!(
            r#"        <tr>
          <td>{id}</td>
          <td><form class="inline" id="edit-{id}" method="post" action="/admin/dish/{id}/edit"></form>
              <input form="edit-{id}" class="wide" type="text" name="name" value="{name}"></td>
          <td><input form="edit-{id}" class="wide" type="text" name="category" value="{category}"></td>
          <td><input form="edit-{id}" type="text" name="price" value="{price}"></td>
          <td><input form="edit-{id}" type="text" name="calories" value="{calories}"></td>
          <td><input form="edit-{id}" class="wide" type="text" name="image" value="{image}"></td>
          <td>
            <button form="edit-{id}" class="save" type="submit">Save</button>
            <form class="inline" method="post" action="/admin/dish/{id}/delete">
              <button class="delete" type="submit">Delete</button>
            </form>
          </td>
        </tr>
"#,
            id = dish.id,
            name = escape(&dish.name),
            category = escape(&dish.category),
            price = dish.price,
            calories = dish.calories,
            image = escape(&dish.image),
        ));
    }
    DASHBOARD_PAGE.replace("{{rows}}", &rows)
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
