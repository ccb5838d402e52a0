//! CPU implementation of the anticlustering exchange method.

use crate::anticluster::impl_generic::{
    distance_anticlustering_impl, diversity_objective_impl, exchange_anticlustering_impl,
    variance_objective_impl,
};
use crate::anticluster::traits::exchange::{
    AnticlusteringAlgorithms, ExchangeOptions, ExchangeResult,
};
use numr::error::Result;
use numr::runtime::cpu::{CpuClient, CpuRuntime};
use numr::tensor::Tensor;

impl AnticlusteringAlgorithms<CpuRuntime> for CpuClient {
    fn exchange_anticlustering(
        &self,
        data: &Tensor<CpuRuntime>,
        options: &ExchangeOptions<CpuRuntime>,
    ) -> Result<ExchangeResult<CpuRuntime>> {
        exchange_anticlustering_impl(self, data, options)
    }

    fn distance_anticlustering(
        &self,
        distances: &Tensor<CpuRuntime>,
        options: &ExchangeOptions<CpuRuntime>,
    ) -> Result<ExchangeResult<CpuRuntime>> {
        distance_anticlustering_impl(self, distances, options)
    }

    fn variance_objective(
        &self,
        data: &Tensor<CpuRuntime>,
        labels: &Tensor<CpuRuntime>,
    ) -> Result<Tensor<CpuRuntime>> {
        variance_objective_impl(self, data, labels)
    }

    fn diversity_objective(
        &self,
        distances: &Tensor<CpuRuntime>,
        labels: &Tensor<CpuRuntime>,
    ) -> Result<Tensor<CpuRuntime>> {
        diversity_objective_impl(self, distances, labels)
    }
}
