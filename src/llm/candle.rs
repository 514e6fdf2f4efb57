//! Quantized GGUF generator built on candle.

use super::pipeline::{SamplingParams, TURN_END, TextGenerator};
use crate::{Error, Result, config::PipelineConfig};
use candle_core::quantized::gguf_file;
use candle_core::{Device, Tensor};
use candle_transformers::generation::LogitsProcessor;
use candle_transformers::models::quantized_llama::ModelWeights;
use std::fs::File;
use std::sync::Mutex;
use tokenizers::Tokenizer;
use tracing::{debug, info};

const FALLBACK_EOS_TOKENS: &[&str] = &["</s>", "<|endoftext|>", "<|end|>"];

pub struct CandleGenerator {
    model: Mutex<ModelWeights>,
    tokenizer: Tokenizer,
    device: Device,
    stop_token: Option<u32>,
    seed: u64,
}

impl CandleGenerator {
    pub fn load(config: &PipelineConfig) -> Result<Self> {
        let device = Device::Cpu;

        info!("Reading GGUF weights from {}", config.model_path);
        let mut file = File::open(&config.model_path)?;
        let content = gguf_file::Content::read(&mut file)?;
        debug!("GGUF file has {} tensors", content.tensor_infos.len());
        let model = ModelWeights::from_gguf(content, &mut file, &device)?;

        let tokenizer = Tokenizer::from_file(&config.tokenizer_path)
            .map_err(|e| Error::model(format!("failed to load tokenizer: {e}")))?;

        let stop_token = tokenizer.token_to_id(TURN_END).or_else(|| {
            FALLBACK_EOS_TOKENS
                .iter()
                .find_map(|token| tokenizer.token_to_id(token))
        });
        if stop_token.is_none() {
            info!("Tokenizer has no end-of-turn token; generation stops at max_tokens");
        }

        Ok(Self {
            model: Mutex::new(model),
            tokenizer,
            device,
            stop_token,
            seed: config.seed,
        })
    }
}

impl TextGenerator for CandleGenerator {
    fn generate(&self, prompt: &str, params: &SamplingParams) -> Result<String> {
        let encoding = self
            .tokenizer
            .encode(prompt, true)
            .map_err(|e| Error::model(format!("tokenizer error: {e}")))?;
        let prompt_tokens = encoding.get_ids().to_vec();

        let temperature = (params.temperature > 0.0).then_some(params.temperature);
        let mut sampler = LogitsProcessor::new(self.seed, temperature, None);

        let mut model = self
            .model
            .lock()
            .map_err(|_| Error::internal("model lock poisoned"))?;

        let input = Tensor::new(prompt_tokens.as_slice(), &self.device)?.unsqueeze(0)?;
        let logits = model.forward(&input, 0)?.squeeze(0)?;
        let mut next_token = sampler.sample(&logits)?;

        let mut generated = Vec::new();
        for index in 0..params.max_tokens as usize {
            if Some(next_token) == self.stop_token {
                break;
            }
            generated.push(next_token);

            let input = Tensor::new(&[next_token], &self.device)?.unsqueeze(0)?;
            let logits = model
                .forward(&input, prompt_tokens.len() + index)?
                .squeeze(0)?;
            next_token = sampler.sample(&logits)?;
        }

        debug!("Generated {} tokens", generated.len());

        let completion = self
            .tokenizer
            .decode(&generated, false)
            .map_err(|e| Error::model(format!("tokenizer error: {e}")))?;

        Ok(format!("{prompt}{completion}"))
    }
}
