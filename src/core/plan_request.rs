use std::path::Path;
use url::form_urlencoded;
use crate::models::endpoint_spec::EndpointSpec;
use crate::models::wrk_invocation::{RequestScript, WrkInvocation};
use crate::models::wrk_options::WrkOptions;

pub fn build_url(base_url: &str, endpoint: &EndpointSpec) -> String {
    let pairs = endpoint.query_pairs();
    if pairs.is_empty() {
        return format!("{}{}", base_url, endpoint.path);
    }
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .finish();
    format!("{}{}?{}", base_url, endpoint.path, query)
}

pub fn plan_invocation(
    program: &str,
    endpoint: &EndpointSpec,
    url: &str,
    options: &WrkOptions,
    script_path: &Path,
) -> WrkInvocation {
    let mut args = options.to_args();
    let script = render_script(endpoint).map(|content| RequestScript {
        path: script_path.to_path_buf(),
        content,
    });
    if let Some(ref script) = script {
        args.push("-s".to_string());
        args.push(script.path.display().to_string());
    }
    // url必须放在最后
    args.push(url.to_string());
    WrkInvocation {
        program: program.to_string(),
        args,
        url: url.to_string(),
        script,
    }
}

/// wrk默认只发GET，其它方法需要脚本改写method，有请求体时一起带上
pub fn render_script(endpoint: &EndpointSpec) -> Option<String> {
    let method = endpoint.method();
    if method == "GET" {
        return None;
    }
    let mut script = format!("wrk.method = \"{}\"\n", lua_escape(&method));
    if endpoint.has_body() {
        if let Some(body) = &endpoint.body {
            script.push_str(&format!("wrk.body = '{}'\n", lua_escape(&body.to_string())));
            script.push_str("wrk.headers[\"Content-Type\"] = \"application/json\"\n");
        }
    }
    Some(script)
}

fn lua_escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    escaped
}
