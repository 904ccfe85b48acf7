use anyhow::anyhow;
use crate::models::endpoint_spec::EndpointSpec;

pub(crate) fn check_endpoints(endpoints: &[EndpointSpec]) -> anyhow::Result<()> {
    for (index, endpoint) in endpoints.iter().enumerate() {
        if endpoint.path.is_empty() {
            return Err(anyhow!("第{}个接口的path不能为空", index + 1));
        }
        if endpoint.method.trim().is_empty() {
            return Err(anyhow!("接口method不能为空: {}", endpoint.path));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn endpoint(path: &str) -> EndpointSpec {
        serde_json::from_value(json!({ "path": path })).unwrap()
    }

    #[test]
    fn test_check_endpoints() {
        assert!(check_endpoints(&[endpoint("/"), endpoint("/items")]).is_ok());
        assert!(check_endpoints(&[]).is_ok());
        assert!(check_endpoints(&[endpoint("/items"), endpoint("")]).is_err());
        // path原样拼接到base_url后面，不要求以/开头
        assert!(check_endpoints(&[endpoint("items")]).is_ok());
    }
}
