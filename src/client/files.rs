use super::base::DominoClient;
use crate::errors::{check, DominoError, FileIOError};
use crate::models::FileEntry;
use crate::types::{BlobKey, CommitId, ProjectPath};
use bytes::Bytes;
use camino::Utf8Path;
use fs_err::tokio::{File, OpenOptions};
use futures::{Stream, TryStream, TryStreamExt};
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Method};
use std::borrow::Cow;
use tokio_util::codec::{BytesCodec, FramedRead};
use tokio_util::io::StreamReader;

impl DominoClient {
    /// List files under `path` at the given commit.
    pub async fn files_list(
        &self,
        commit_id: &CommitId,
        path: &ProjectPath,
    ) -> Result<FileEntry, DominoError> {
        self.get_json(self.routes().files_list(commit_id, path)).await
    }

    // ==================================================
    //                 FILES UPLOAD
    // ==================================================

    /// Upload a stream of bytes as a project file.
    ///
    /// [`DominoClient::files_upload_stream`] is a lower-level function called by
    /// [`DominoClient::files_upload`].
    ///
    /// # Arguments
    ///
    /// - path: project file path, starting with `/`
    /// - stream: stream of byte data
    /// - filename: included in the multi-part request (not the project file path)
    pub async fn files_upload_stream<S, F>(
        &self,
        path: &ProjectPath,
        stream: S,
        filename: F,
        content_length: u64,
    ) -> Result<reqwest::Response, FileIOError>
    where
        S: TryStream + Send + Sync + 'static,
        S::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
        Bytes: From<S::Ok>,
        F: Into<Cow<'static, str>>,
    {
        // https://github.com/seanmonstar/reqwest/issues/646#issuecomment-616985015
        let reader = Body::wrap_stream(stream);
        let form = Form::new().part(
            "file",
            Part::stream_with_length(reader, content_length).file_name(filename),
        );
        let res = self
            .request(Method::PUT, self.routes().files_upload(path))
            .multipart(form)
            .send()
            .await?;
        Ok(check(res).await?)
    }

    /// Upload a local file to the project at `path`.
    pub async fn files_upload(
        &self,
        path: &ProjectPath,
        local_file: &Utf8Path,
    ) -> Result<reqwest::Response, FileIOError> {
        let filename = local_file
            .file_name()
            .ok_or_else(|| FileIOError::PathError(local_file.to_string()))?
            .to_string();
        let file = File::open(local_file).await.map_err(FileIOError::IO)?;
        let content_length = fs_err::tokio::metadata(local_file).await?.len();
        let stream = FramedRead::new(file, BytesCodec::new());
        self.files_upload_stream(path, stream, filename, content_length).await
    }

    // ==================================================
    //                 BLOBS
    // ==================================================

    /// Open a stream of a blob's content.
    pub async fn blobs_get(
        &self,
        key: &BlobKey,
    ) -> Result<impl Stream<Item = Result<Bytes, reqwest::Error>>, DominoError> {
        let res = self
            .request(Method::GET, self.routes().blobs_get(key))
            .send()
            .await?;
        Ok(check(res).await?.bytes_stream())
    }

    /// Download a blob to a local path.
    pub async fn blobs_download(
        &self,
        key: &BlobKey,
        dst: &Utf8Path,
        clobber: bool,
    ) -> Result<(), FileIOError> {
        let stream = self
            .blobs_get(key)
            .await?
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::ConnectionAborted, e));
        let mut file = if clobber {
            File::create(dst).await
        } else {
            OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(dst)
                .await
        }
        .map_err(FileIOError::IO)?;
        let mut reader = StreamReader::new(stream);
        tokio::io::copy(&mut reader, &mut file).await?;
        Ok(())
    }
}
