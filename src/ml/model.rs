use burn::{
    nn::{Embedding, EmbeddingConfig, Linear, LinearConfig},
    prelude::*,
    tensor::activation::{relu, sigmoid},
};

/// Shape of the shipped classifier. Stored next to the weights as
/// `model_config.json` so the module can be rebuilt before loading.
// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize.
#[derive(Config, Debug)]
pub struct TextClassifierConfig {
    pub vocab_size:    usize,
    pub embedding_dim: usize,
    pub hidden_dim:    usize,
}

impl TextClassifierConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> TextClassifierModel<B> {
        TextClassifierModel {
            embedding:  EmbeddingConfig::new(self.vocab_size, self.embedding_dim).init(device),
            hidden:     LinearConfig::new(self.embedding_dim, self.hidden_dim).init(device),
            output:     LinearConfig::new(self.hidden_dim, 1).init(device),
            vocab_size: self.vocab_size,
        }
    }
}

/// Embedding → global average pooling → dense(ReLU) → dense(sigmoid).
#[derive(Module, Debug)]
pub struct TextClassifierModel<B: Backend> {
    pub embedding:  Embedding<B>,
    pub hidden:     Linear<B>,
    pub output:     Linear<B>,
    pub vocab_size: usize,
}

impl<B: Backend> TextClassifierModel<B> {
    /// input_ids: [batch, seq_len] → probabilities: [batch, 1]
    pub fn forward(&self, input_ids: Tensor<B, 2, Int>) -> Tensor<B, 2> {
        let [batch_size, _seq_len] = input_ids.dims();

        let x = self.embedding.forward(input_ids);   // [batch, seq_len, emb]
        let [_, _, emb] = x.dims();
        let pooled = x.mean_dim(1).reshape([batch_size, emb]);

        let h = relu(self.hidden.forward(pooled));
        sigmoid(self.output.forward(h))
    }
}
