// Render URL construction for the d-solo endpoint
//
// Parameter order is part of the wire contract and must not change:
// orgId, panelId, from/to, var-* pairs, width/height, tz.
use crate::domain::dashboard::Panel;
use crate::domain::error::ExportError;
use crate::domain::export::{DashboardVariables, ExportRequest, ExportSize, TimeRange};

/// Builds the full path-and-query for one panel render. Pure computation;
/// any missing required field aborts with no partial URL.
pub fn render_path(request: &ExportRequest) -> Result<String, ExportError> {
    let mut query = format!("orgId={}&{}", request.org_id, panel_query(&request.panel));
    query.push('&');
    query.push_str(&time_range_query(&request.range)?);
    if !request.variables.is_empty() {
        query.push('&');
        query.push_str(&variables_query(&request.variables));
    }
    query.push('&');
    query.push_str(&size_query(&request.size)?);

    let zone = resolve_timezone(&request.timezone)?;
    Ok(format!(
        "/render/d-solo/{}/{}?{}&tz={}",
        request.dashboard.uid,
        request.dashboard.title,
        query,
        urlencoding::encode(&zone),
    ))
}

fn panel_query(panel: &Panel) -> String {
    format!("panelId={}", panel.id)
}

fn time_range_query(range: &TimeRange) -> Result<String, ExportError> {
    if range.from.is_empty() {
        return Err(ExportError::MissingParameter("from"));
    }
    if range.to.is_empty() {
        return Err(ExportError::MissingParameter("to"));
    }
    Ok(format!("from={}&to={}", range.from, range.to))
}

fn size_query(size: &ExportSize) -> Result<String, ExportError> {
    if size.width == 0 {
        return Err(ExportError::MissingParameter("width"));
    }
    if size.height == 0 {
        return Err(ExportError::MissingParameter("height"));
    }
    Ok(format!("width={}&height={}", size.width, size.height))
}

/// One `var-{name}={value}` pair per value, in the order the values were
/// given. Names and values pass through verbatim.
fn variables_query(variables: &DashboardVariables) -> String {
    variables
        .iter()
        .flat_map(|(name, values)| values.iter().map(move |value| format!("var-{}={}", name, value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Resolves an IANA zone name against the timezone database and returns the
/// canonical name. Unknown zones fail before any network activity.
fn resolve_timezone(name: &str) -> Result<String, ExportError> {
    let zone: chrono_tz::Tz = name
        .parse()
        .map_err(|_| ExportError::UnknownTimezone(name.to_string()))?;
    Ok(zone.name().to_string())
}
