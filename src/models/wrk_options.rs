/// 每次调用wrk时固定的并发/时长参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrkOptions {
    pub threads: u32,
    pub connections: u32,
    pub duration: String,
    pub latency: bool,
}

impl Default for WrkOptions {
    fn default() -> Self {
        WrkOptions {
            threads: 8,
            connections: 100,
            duration: "10s".to_string(),
            latency: true,
        }
    }
}

impl WrkOptions {
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            format!("-t{}", self.threads),
            format!("-c{}", self.connections),
            format!("-d{}", self.duration),
        ];
        if self.latency {
            args.push("--latency".to_string());
        }
        args
    }
}
