use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, trace};
use vox_dto::{
    ApiError, ApiResult, AudioId, Folder, FolderId, MoveAudio, NameBody, SaveAudio, SidebarFolder,
    TranslateRequest, TranslateResponse, VoxProvider,
};

use crate::{Endpoint, Routes};

/// Talks to the backend with `fetch`.
pub struct HttpProvider {
    routes: Routes,
}

impl HttpProvider {
    pub fn new(routes: Routes) -> Self {
        Self { routes }
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint) -> ApiResult<T> {
        let url = self.routes.url(endpoint);
        trace!("GET {url}");
        let resp = Request::get(&url).send().await.map_err(network)?;
        decode(check(resp).await?).await
    }

    async fn send_json<B: Serialize>(&self, builder: RequestBuilder, body: &B) -> ApiResult<Response> {
        let req = builder
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let resp = req.send().await.map_err(network)?;
        check(resp).await
    }

    async fn post<B: Serialize>(&self, endpoint: Endpoint, body: &B) -> ApiResult<Response> {
        let url = self.routes.url(endpoint);
        debug!("POST {url}");
        self.send_json(Request::post(&url), body).await
    }

    async fn put<B: Serialize>(&self, endpoint: Endpoint, body: &B) -> ApiResult<()> {
        let url = self.routes.url(endpoint);
        debug!("PUT {url}");
        self.send_json(Request::put(&url), body).await?;
        Ok(())
    }

    async fn delete(&self, endpoint: Endpoint) -> ApiResult<()> {
        let url = self.routes.url(endpoint);
        debug!("DELETE {url}");
        let resp = Request::delete(&url).send().await.map_err(network)?;
        check(resp).await?;
        Ok(())
    }
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

async fn check(resp: Response) -> ApiResult<Response> {
    if resp.ok() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::from_status(resp.status(), &body))
}

async fn decode<T: DeserializeOwned>(resp: Response) -> ApiResult<T> {
    let text = resp.text().await.map_err(network)?;
    Ok(serde_json::from_str(&text)?)
}

#[async_trait(?Send)]
impl VoxProvider for HttpProvider {
    async fn translate(&self, req: TranslateRequest) -> ApiResult<TranslateResponse> {
        let resp = self.post(Endpoint::Translate, &req).await?;
        decode(resp).await
    }

    async fn load_folders(&self) -> ApiResult<Vec<Folder>> {
        self.get(Endpoint::Folders).await
    }

    async fn load_sidebar_folders(&self) -> ApiResult<Vec<SidebarFolder>> {
        self.get(Endpoint::SidebarFolders).await
    }

    async fn create_folder(&self, name: String) -> ApiResult<()> {
        self.post(Endpoint::CreateFolder, &NameBody { name }).await?;
        Ok(())
    }

    async fn rename_folder(&self, id: FolderId, name: String) -> ApiResult<()> {
        self.put(Endpoint::EditFolder(id), &NameBody { name }).await
    }

    async fn delete_folder(&self, id: FolderId) -> ApiResult<()> {
        self.delete(Endpoint::DeleteFolder(id)).await
    }

    async fn rename_audio(&self, id: AudioId, name: String) -> ApiResult<()> {
        self.put(Endpoint::EditAudio(id), &NameBody { name }).await
    }

    async fn delete_audio(&self, id: AudioId) -> ApiResult<()> {
        self.delete(Endpoint::DeleteAudio(id)).await
    }

    async fn move_audio(&self, req: MoveAudio) -> ApiResult<()> {
        self.post(Endpoint::MoveAudio, &req).await?;
        Ok(())
    }

    async fn save_audio(&self, req: SaveAudio) -> ApiResult<()> {
        self.post(Endpoint::SaveAudio, &req).await?;
        Ok(())
    }
}
