//! Parsing and normalization of submitted form values.

use crate::{model::member::AddMemberForm, server::error::AppError};

/// Trims a submitted value, mapping missing or whitespace-only input to `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trims each submitted link and drops the empty ones, keeping submission order.
pub fn normalize_links<I>(links: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    links
        .into_iter()
        .map(|link| link.trim().to_string())
        .filter(|link| !link.is_empty())
        .collect()
}

/// Decodes an urlencoded "add member" body.
///
/// Every `links[]` occurrence is collected in order; for the other fields the first
/// occurrence wins. Unknown fields are ignored.
///
/// # Returns
/// - `Ok(AddMemberForm)` - Body decoded
/// - `Err(AppError::BadRequest(_))` - No `category` field was submitted
pub fn parse_member_form(body: &[u8]) -> Result<AddMemberForm, AppError> {
    let mut form = AddMemberForm::default();
    let mut category = None;

    for (key, value) in url::form_urlencoded::parse(body) {
        let value = value.into_owned();

        let slot = match key.as_ref() {
            "links[]" | "links" => {
                form.links.push(value);
                continue;
            }
            "category" => {
                category.get_or_insert(value);
                continue;
            }
            "name" => &mut form.name,
            "email" => &mut form.email,
            "phone" => &mut form.phone,
            "blood" => &mut form.blood,
            "designation" => &mut form.designation,
            "field_interest" => &mut form.field_interest,
            "position" => &mut form.position,
            "expertise" => &mut form.expertise,
            "student_id" => &mut form.student_id,
            "reg_no" => &mut form.reg_no,
            "batch" => &mut form.batch,
            "area_interest" => &mut form.area_interest,
            _ => continue,
        };

        slot.get_or_insert(value);
    }

    form.category =
        category.ok_or_else(|| AppError::BadRequest("Missing field `category`".to_string()))?;

    Ok(form)
}
